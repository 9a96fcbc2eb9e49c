//! Document & Upload Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tone::Tone;
use crate::types::{Points, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentCategory {
    Policy,
    Contract,
    Performance,
    Training,
    Benefits,
    Compliance,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 6] = [
        DocumentCategory::Policy,
        DocumentCategory::Contract,
        DocumentCategory::Performance,
        DocumentCategory::Training,
        DocumentCategory::Benefits,
        DocumentCategory::Compliance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocumentCategory::Policy => "Policy",
            DocumentCategory::Contract => "Contract",
            DocumentCategory::Performance => "Performance",
            DocumentCategory::Training => "Training",
            DocumentCategory::Benefits => "Benefits",
            DocumentCategory::Compliance => "Compliance",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            DocumentCategory::Policy => Tone::Blue,
            DocumentCategory::Contract => Tone::Purple,
            DocumentCategory::Performance => Tone::Green,
            DocumentCategory::Training => Tone::Orange,
            DocumentCategory::Benefits => Tone::Pink,
            DocumentCategory::Compliance => Tone::Yellow,
        }
    }
}

/// Uploaded document record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub name: String,
    pub category: DocumentCategory,
    pub uploaded_by: String,
    pub upload_date: NaiveDate,
    /// Display size, e.g. `"2.4 MB"`
    pub size: String,
    pub points_earned: Points,
}

/// Selected file metadata; contents are never read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub file_name: String,
    pub size_bytes: u64,
}

/// Upload form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpload {
    pub name: String,
    pub category: Option<DocumentCategory>,
    pub file: Option<FileMeta>,
}
