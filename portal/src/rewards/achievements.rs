//! Achievement Tracker
//!
//! Advances achievement progress on qualifying actions and pays the bonus
//! through the ledger at the moment an achievement completes. Completed
//! achievements are frozen: progress stops and the bonus is never paid twice.

use serde::Serialize;
use shared::models::{Achievement, AchievementTrigger, PointsReason};
use shared::types::{Points, RecordId};

use super::ledger::PointsLedger;

/// An achievement that completed during a `record` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unlocked {
    pub id: RecordId,
    pub title: String,
    pub points: Points,
}

#[derive(Debug, Clone, Default)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
}

impl AchievementTracker {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self { achievements }
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: RecordId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.is_completed).count()
    }

    /// Apply one qualifying action.
    ///
    /// Every incomplete achievement driven by `trigger` gains one unit of
    /// progress; those reaching their target complete and credit their
    /// reward to `ledger`.
    pub fn record(
        &mut self,
        trigger: AchievementTrigger,
        ledger: &mut PointsLedger,
    ) -> Vec<Unlocked> {
        let mut unlocked = Vec::new();

        for achievement in self
            .achievements
            .iter_mut()
            .filter(|a| !a.is_completed && a.trigger == Some(trigger))
        {
            achievement.progress = achievement.progress.saturating_add(1);
            tracing::debug!(
                achievement = %achievement.title,
                progress = achievement.progress,
                target = achievement.target,
                "Achievement progressed"
            );

            if achievement.progress >= achievement.target {
                achievement.is_completed = true;
                ledger.credit(
                    achievement.points,
                    PointsReason::AchievementUnlocked {
                        title: achievement.title.clone(),
                    },
                );
                tracing::info!(
                    achievement = %achievement.title,
                    points = achievement.points,
                    "Achievement unlocked"
                );
                unlocked.push(Unlocked {
                    id: achievement.id,
                    title: achievement.title.clone(),
                    points: achievement.points,
                });
            }
        }

        unlocked
    }
}
