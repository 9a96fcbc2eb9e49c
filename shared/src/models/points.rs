//! Points Ledger Models

use serde::{Deserialize, Serialize};

use crate::types::{Points, Timestamp};

/// Direction of a ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEntryKind {
    Credit,
    Debit,
}

/// Why points moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointsReason {
    DocumentUploaded { document_name: String },
    DocumentDownloaded { document_name: String },
    AchievementUnlocked { title: String },
    MarketplacePurchase { item_name: String },
    /// Credit reported by a caller outside the document flow
    Manual,
    Redemption,
}

impl PointsReason {
    /// One-line description for activity feeds
    pub fn describe(&self) -> String {
        match self {
            PointsReason::DocumentUploaded { document_name } => {
                format!("Uploaded {}", document_name)
            }
            PointsReason::DocumentDownloaded { document_name } => {
                format!("Downloaded {}", document_name)
            }
            PointsReason::AchievementUnlocked { title } => format!("{} Achievement", title),
            PointsReason::MarketplacePurchase { item_name } => format!("Redeemed {}", item_name),
            PointsReason::Manual => "Points earned".to_string(),
            PointsReason::Redemption => "Points redeemed".to_string(),
        }
    }
}

/// One committed balance change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: LedgerEntryKind,
    pub amount: Points,
    pub reason: PointsReason,
    pub balance_after: Points,
    pub at: Timestamp,
}
