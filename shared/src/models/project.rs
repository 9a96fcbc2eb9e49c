//! Project Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tone::Tone;
use crate::types::RecordId;

/// Project approval status
///
/// `Pending` moves to `Approved` or `Rejected`, both terminal.
/// `InProgress` only exists on seeded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Pending,
    Approved,
    Rejected,
    InProgress,
}

impl ProjectStatus {
    pub fn tone(&self) -> Tone {
        match self {
            ProjectStatus::Approved => Tone::Green,
            ProjectStatus::Rejected => Tone::Red,
            ProjectStatus::InProgress => Tone::Blue,
            ProjectStatus::Pending => Tone::Yellow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::Approved => "approved",
            ProjectStatus::Rejected => "rejected",
            ProjectStatus::InProgress => "in-progress",
        }
    }
}

/// Reviewer decision on a pending project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectDecision {
    Approve,
    Reject,
}

impl ProjectDecision {
    pub fn resulting_status(&self) -> ProjectStatus {
        match self {
            ProjectDecision::Approve => ProjectStatus::Approved,
            ProjectDecision::Reject => ProjectStatus::Rejected,
        }
    }
}

/// Project record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub members: Vec<String>,
    pub milestone: String,
    pub duration: String,
    pub status: ProjectStatus,
    pub created_date: NaiveDate,
    pub created_by: String,
}

/// Create project form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    pub milestone: String,
    pub duration: String,
    pub members: Vec<String>,
}

/// Counters shown above the project table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub in_progress: usize,
}
