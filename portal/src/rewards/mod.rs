//! Points economy: ledger, tiers, achievements and leaderboard

pub mod achievements;
pub mod leaderboard;
pub mod ledger;
pub mod tiers;

pub use achievements::{AchievementTracker, Unlocked};
pub use leaderboard::Peer;
pub use ledger::{LedgerError, PointsLedger};
pub use tiers::{TierStatus, TierTable, TierTableError};
