//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tone::Tone;
use crate::types::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn tone(&self) -> Tone {
        match self {
            EmployeeStatus::Active => Tone::Green,
            EmployeeStatus::Inactive => Tone::Gray,
        }
    }
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
    pub location: String,
    pub benefits: String,
    /// Benefit amount as entered, e.g. `"$5,000"`
    pub amount: String,
    /// File name of the benefits attachment
    pub attachment: Option<String>,
}

/// Add/edit employee form
///
/// Blank strings count as missing for required fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub location: String,
    pub benefits: String,
    pub amount: String,
    pub attachment: Option<String>,
}
