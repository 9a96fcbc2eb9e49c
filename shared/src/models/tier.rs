//! Membership Tier Models

use serde::{Deserialize, Serialize};

use super::tone::Tone;
use crate::types::Points;

/// Membership tier names, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TierLevel {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl TierLevel {
    pub fn name(&self) -> &'static str {
        match self {
            TierLevel::Bronze => "Bronze",
            TierLevel::Silver => "Silver",
            TierLevel::Gold => "Gold",
            TierLevel::Platinum => "Platinum",
        }
    }

    /// Card gradient as (from, to) tones
    pub fn gradient(&self) -> (Tone, Tone) {
        match self {
            TierLevel::Bronze => (Tone::Amber, Tone::Amber),
            TierLevel::Silver => (Tone::Gray, Tone::Gray),
            TierLevel::Gold => (Tone::Yellow, Tone::Yellow),
            TierLevel::Platinum => (Tone::Purple, Tone::Pink),
        }
    }
}

impl std::fmt::Display for TierLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A band of the points range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub level: TierLevel,
    pub min_points: Points,
    /// Inclusive upper bound; `None` for the top tier
    pub max_points: Option<Points>,
    pub benefits: Vec<String>,
}

impl Tier {
    /// Whether `balance` falls inside this band
    pub fn contains(&self, balance: Points) -> bool {
        balance >= self.min_points && self.max_points.is_none_or(|max| balance <= max)
    }

    /// `"200-499 points"` or `"1000+ points"`
    pub fn range_label(&self) -> String {
        match self.max_points {
            Some(max) => format!("{}-{} points", self.min_points, max),
            None => format!("{}+ points", self.min_points),
        }
    }
}
