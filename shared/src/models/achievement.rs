//! Achievement Models

use serde::{Deserialize, Serialize};

use crate::types::{Points, RecordId};

/// Action that advances an achievement's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementTrigger {
    DocumentUploaded,
}

/// Progress-tracked goal granting a one-time bonus on completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub points: Points,
    pub progress: u32,
    pub target: u32,
    pub is_completed: bool,
    /// `None` for achievements tracked outside this session
    pub trigger: Option<AchievementTrigger>,
}

impl Achievement {
    /// Completion ratio in [0, 1] for progress bars
    pub fn progress_ratio(&self) -> f64 {
        if self.is_completed || self.target == 0 {
            return 1.0;
        }
        (f64::from(self.progress) / f64::from(self.target)).min(1.0)
    }
}
