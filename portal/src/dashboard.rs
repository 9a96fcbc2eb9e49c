//! Read-only projections for the dashboard and rewards pages
//!
//! Everything here is recomputed from `PortalState` on each call; nothing
//! is cached, so a projection always reflects the current balance.

use serde::Serialize;
use shared::models::{
    EmployeeStatus, LeaderboardEntry, LedgerEntry, LedgerEntryKind, Tier, TierLevel,
};
use shared::types::{Points, Timestamp};

use crate::core::PortalState;
use crate::rewards::TierStatus;
use crate::rewards::leaderboard::rank;

/// Entries shown in the recent activity lists
pub const RECENT_LIMIT: usize = 5;

/// One ledger movement, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityItem {
    pub description: String,
    pub kind: LedgerEntryKind,
    pub points: Points,
    pub at: Timestamp,
}

impl From<&LedgerEntry> for ActivityItem {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            description: entry.reason.describe(),
            kind: entry.kind,
            points: entry.amount,
            at: entry.at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub balance: Points,
    pub tier: TierLevel,
    pub total_employees: usize,
    pub active_employees: usize,
    pub total_documents: usize,
    pub pending_projects: usize,
    pub completed_achievements: usize,
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCard {
    pub tier: Tier,
    pub range_label: String,
    pub is_current: bool,
    /// Balance is still below this tier's minimum
    pub is_locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardsOverview {
    pub status: TierStatus,
    pub tiers: Vec<TierCard>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub recent_rewards: Vec<ActivityItem>,
}

impl PortalState {
    pub fn dashboard(&self) -> DashboardSummary {
        let balance = self.balance();
        let employees = self.employees().all();

        DashboardSummary {
            balance,
            tier: self.tiers().resolve(balance).level,
            total_employees: employees.len(),
            active_employees: employees
                .iter()
                .filter(|e| e.status == EmployeeStatus::Active)
                .count(),
            total_documents: self.documents().all().len(),
            pending_projects: self.projects().stats().pending,
            completed_achievements: self.achievements().completed_count(),
            recent_activity: self
                .ledger()
                .recent(RECENT_LIMIT)
                .map(ActivityItem::from)
                .collect(),
        }
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        rank(
            self.peers(),
            &self.config().current_user,
            self.balance(),
            self.tiers(),
        )
    }

    pub fn rewards_overview(&self) -> RewardsOverview {
        let status = self.tier_status();
        let balance = status.balance;

        let tiers = self
            .tiers()
            .tiers()
            .iter()
            .map(|tier| TierCard {
                tier: tier.clone(),
                range_label: tier.range_label(),
                is_current: tier.level == status.current.level,
                is_locked: balance < tier.min_points,
            })
            .collect();

        RewardsOverview {
            tiers,
            leaderboard: self.leaderboard(),
            recent_rewards: self
                .ledger()
                .history()
                .iter()
                .rev()
                .filter(|e| e.kind == LedgerEntryKind::Credit)
                .take(RECENT_LIMIT)
                .map(ActivityItem::from)
                .collect(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_counts_seed() {
        let state = PortalState::default();
        let summary = state.dashboard();
        assert_eq!(summary.balance, 450);
        assert_eq!(summary.tier, TierLevel::Silver);
        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.active_employees, 4);
        assert_eq!(summary.pending_projects, 2);
        assert_eq!(summary.completed_achievements, 2);
        assert!(summary.recent_activity.is_empty());
    }

    #[test]
    fn test_tier_cards() {
        let state = PortalState::default();
        let overview = state.rewards_overview();
        let flags: Vec<_> = overview
            .tiers
            .iter()
            .map(|c| (c.tier.level, c.is_current, c.is_locked))
            .collect();
        assert_eq!(
            flags,
            [
                (TierLevel::Bronze, false, false),
                (TierLevel::Silver, true, false),
                (TierLevel::Gold, false, true),
                (TierLevel::Platinum, false, true),
            ]
        );
        assert_eq!(overview.tiers[3].range_label, "1000+ points");
    }

    #[test]
    fn test_recent_rewards_skip_debits() {
        let mut state = PortalState::default();
        state.report_points_earned(20);
        assert!(state.attempt_purchase(100));
        state.report_points_earned(5);

        let overview = state.rewards_overview();
        let points: Vec<_> = overview.recent_rewards.iter().map(|a| a.points).collect();
        assert_eq!(points, [5, 20]);

        let activity = state.dashboard().recent_activity;
        assert_eq!(activity.len(), 3);
        assert_eq!(activity[1].kind, LedgerEntryKind::Debit);
        assert_eq!(activity[1].description, "Points redeemed");
    }

    #[test]
    fn test_leaderboard_places_user() {
        let state = PortalState::default();
        let board = state.leaderboard();
        assert_eq!(board.len(), 8);
        assert_eq!(board[3].name, "You (John Doe)");
        assert_eq!(board[3].rank, 4);
        assert_eq!(board[0].badge, TierLevel::Platinum);
        assert_eq!(board[7].badge, TierLevel::Bronze);
    }
}
