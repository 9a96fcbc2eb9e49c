//! Tier Resolver
//!
//! Maps a balance onto the membership tier table. The table is validated on
//! construction to be a contiguous ascending partition starting at zero, so
//! every balance resolves to exactly one tier.

use serde::Serialize;
use shared::error::AppError;
use shared::models::{Tier, TierLevel};
use shared::types::Points;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TierTableError {
    #[error("tier table is empty")]
    Empty,
    #[error("lowest tier must start at 0, starts at {0}")]
    DoesNotStartAtZero(Points),
    #[error("tier {0} has max below min")]
    Inverted(TierLevel),
    #[error("gap or overlap between {lower} and {upper}")]
    NotContiguous { lower: TierLevel, upper: TierLevel },
    #[error("only the top tier may be unbounded ({0} is not the top)")]
    UnboundedBelowTop(TierLevel),
    #[error("top tier {0} must be unbounded")]
    BoundedTop(TierLevel),
}

impl From<TierTableError> for AppError {
    fn from(err: TierTableError) -> Self {
        AppError::config(err.to_string())
    }
}

/// Tier table with the partition invariant checked
#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

/// Where a balance sits within the tier table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStatus {
    pub balance: Points,
    pub current: Tier,
    pub next: Option<Tier>,
    /// 0 when already in the top tier
    pub points_to_next: Points,
    /// Fraction of the way from `current.min_points` to `next.min_points`, in [0, 1]
    pub progress: f64,
}

impl TierStatus {
    pub fn progress_percent(&self) -> f64 {
        self.progress * 100.0
    }
}

impl TierTable {
    pub fn new(tiers: Vec<Tier>) -> Result<Self, TierTableError> {
        let first = tiers.first().ok_or(TierTableError::Empty)?;
        if first.min_points != 0 {
            return Err(TierTableError::DoesNotStartAtZero(first.min_points));
        }

        for pair in tiers.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let Some(max) = lower.max_points else {
                return Err(TierTableError::UnboundedBelowTop(lower.level));
            };
            if max < lower.min_points {
                return Err(TierTableError::Inverted(lower.level));
            }
            if max.checked_add(1) != Some(upper.min_points) {
                return Err(TierTableError::NotContiguous {
                    lower: lower.level,
                    upper: upper.level,
                });
            }
        }

        if let Some(top) = tiers.last()
            && top.max_points.is_some()
        {
            return Err(TierTableError::BoundedTop(top.level));
        }

        Ok(Self { tiers })
    }

    /// Bronze 0-199, Silver 200-499, Gold 500-999, Platinum 1000+
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                Tier {
                    level: TierLevel::Bronze,
                    min_points: 0,
                    max_points: Some(199),
                    benefits: benefits(&["Basic rewards access", "10% discount in marketplace"]),
                },
                Tier {
                    level: TierLevel::Silver,
                    min_points: 200,
                    max_points: Some(499),
                    benefits: benefits(&[
                        "All Bronze benefits",
                        "15% discount in marketplace",
                        "Priority support",
                    ]),
                },
                Tier {
                    level: TierLevel::Gold,
                    min_points: 500,
                    max_points: Some(999),
                    benefits: benefits(&[
                        "All Silver benefits",
                        "20% discount in marketplace",
                        "Exclusive items",
                        "Bonus point multiplier",
                    ]),
                },
                Tier {
                    level: TierLevel::Platinum,
                    min_points: 1000,
                    max_points: None,
                    benefits: benefits(&[
                        "All Gold benefits",
                        "25% discount in marketplace",
                        "VIP access",
                        "Double points on uploads",
                    ]),
                },
            ],
        }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    fn position(&self, balance: Points) -> usize {
        // Ascending and contiguous from 0: the last tier whose min is reached.
        self.tiers
            .iter()
            .rposition(|t| t.min_points <= balance)
            .unwrap_or(0)
    }

    /// The unique tier containing `balance`
    pub fn resolve(&self, balance: Points) -> &Tier {
        &self.tiers[self.position(balance)]
    }

    pub fn status(&self, balance: Points) -> TierStatus {
        let idx = self.position(balance);
        let current = &self.tiers[idx];
        let next = self.tiers.get(idx + 1);

        let (points_to_next, progress) = match next {
            Some(next) => {
                let span = next.min_points - current.min_points;
                let done = balance - current.min_points;
                let progress = (done as f64 / span as f64).clamp(0.0, 1.0);
                (next.min_points - balance, progress)
            }
            None => (0, 1.0),
        };

        tracing::debug!(balance, tier = %current.level, progress, "Tier resolved");

        TierStatus {
            balance,
            current: current.clone(),
            next: next.cloned(),
            points_to_next,
            progress,
        }
    }
}

fn benefits(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}
