//! Unified error codes for the HRIS portal
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Points ledger errors
//! - 2xxx: Marketplace errors
//! - 4xxx: Employee errors
//! - 5xxx: Project errors
//! - 6xxx: Document errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a rendering shell can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Points ====================
    /// Balance is smaller than the requested debit
    InsufficientPoints = 1001,

    // ==================== 2xxx: Marketplace ====================
    /// Catalog item not found
    ItemNotFound = 2001,
    /// Catalog item has no stock left
    ItemOutOfStock = 2002,

    // ==================== 4xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 4001,

    // ==================== 5xxx: Project ====================
    /// Project not found
    ProjectNotFound = 5001,
    /// Project is not in a state that allows the requested transition
    InvalidProjectTransition = 5002,
    /// Project has no team members
    ProjectMembersRequired = 5003,
    /// Member is not on the team roster
    UnknownTeamMember = 5004,

    // ==================== 6xxx: Document ====================
    /// Document not found
    DocumentNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default English message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::RequiredField => "Please fill in all required fields",

            ErrorCode::InsufficientPoints => "Insufficient points!",

            ErrorCode::ItemNotFound => "Marketplace item not found",
            ErrorCode::ItemOutOfStock => "Item is out of stock",

            ErrorCode::EmployeeNotFound => "Employee not found",

            ErrorCode::ProjectNotFound => "Project not found",
            ErrorCode::InvalidProjectTransition => "Project is no longer pending",
            ErrorCode::ProjectMembersRequired => "Please add at least one team member",
            ErrorCode::UnknownTeamMember => "Team member is not on the roster",

            ErrorCode::DocumentNotFound => "Document not found",

            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

/// Returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            7 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::InsufficientPoints),

            2001 => Ok(ErrorCode::ItemNotFound),
            2002 => Ok(ErrorCode::ItemOutOfStock),

            4001 => Ok(ErrorCode::EmployeeNotFound),

            5001 => Ok(ErrorCode::ProjectNotFound),
            5002 => Ok(ErrorCode::InvalidProjectTransition),
            5003 => Ok(ErrorCode::ProjectMembersRequired),
            5004 => Ok(ErrorCode::UnknownTeamMember),

            6001 => Ok(ErrorCode::DocumentNotFound),

            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
