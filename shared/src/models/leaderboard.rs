//! Leaderboard Model

use serde::{Deserialize, Serialize};

use super::tier::TierLevel;
use crate::types::Points;

/// Ranked leaderboard row; `badge` is resolved from `points`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub points: Points,
    pub badge: TierLevel,
    pub is_current_user: bool,
}
