//! Marketplace Catalog & Purchase Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tier::TierLevel;
use super::tone::Tone;
use crate::types::{Points, RecordId};

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    GiftCards,
    Food,
    Electronics,
    Entertainment,
    TimeOff,
    Perks,
    Experience,
    Shopping,
}

impl ItemCategory {
    /// Categories offered as shop filters, in display order
    pub const FILTERABLE: [ItemCategory; 7] = [
        ItemCategory::GiftCards,
        ItemCategory::Food,
        ItemCategory::Electronics,
        ItemCategory::Entertainment,
        ItemCategory::TimeOff,
        ItemCategory::Perks,
        ItemCategory::Experience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::GiftCards => "Gift Cards",
            ItemCategory::Food => "Food & Drinks",
            ItemCategory::Electronics => "Electronics",
            ItemCategory::Entertainment => "Entertainment",
            ItemCategory::TimeOff => "Time Off",
            ItemCategory::Perks => "Perks",
            ItemCategory::Experience => "Experiences",
            ItemCategory::Shopping => "Shopping",
        }
    }
}

/// Shop filter: everything, or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ItemCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: ItemCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// Remaining stock of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stock {
    Limited(u32),
    Unlimited,
}

impl Stock {
    pub fn is_available(&self) -> bool {
        !matches!(self, Stock::Limited(0))
    }

    /// `"25 left"`, `"Out of stock"` or `"Unlimited"`
    pub fn label(&self) -> String {
        match self {
            Stock::Limited(0) => "Out of stock".to_string(),
            Stock::Limited(n) => format!("{} left", n),
            Stock::Unlimited => "Unlimited".to_string(),
        }
    }
}

/// Catalog entry redeemable for a fixed points cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceItem {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub points_cost: Points,
    pub stock: Stock,
    /// Display label only; purchasing is not gated on tier
    pub tier: Option<TierLevel>,
    pub tone: Tone,
}

/// Purchase fulfilment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    Pending,
    Redeemed,
}

impl PurchaseStatus {
    pub fn tone(&self) -> Tone {
        match self {
            PurchaseStatus::Pending => Tone::Yellow,
            PurchaseStatus::Redeemed => Tone::Green,
        }
    }
}

/// Audit entry created when a redemption debit succeeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: RecordId,
    pub item_name: String,
    pub points_cost: Points,
    pub date: NaiveDate,
    pub status: PurchaseStatus,
}
