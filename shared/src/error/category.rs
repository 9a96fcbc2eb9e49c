//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Points ledger errors
/// - 2xxx: Marketplace errors
/// - 4xxx: Employee errors
/// - 5xxx: Project errors
/// - 6xxx: Document errors
/// - anything else (9xxx in practice): System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Points ledger errors (1xxx)
    Points,
    /// Marketplace errors (2xxx)
    Marketplace,
    /// Employee errors (4xxx)
    Employee,
    /// Project errors (5xxx)
    Project,
    /// Document errors (6xxx)
    Document,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Points,
            2000..3000 => Self::Marketplace,
            4000..5000 => Self::Employee,
            5000..6000 => Self::Project,
            6000..7000 => Self::Document,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Points => "points",
            Self::Marketplace => "marketplace",
            Self::Employee => "employee",
            Self::Project => "project",
            Self::Document => "document",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
