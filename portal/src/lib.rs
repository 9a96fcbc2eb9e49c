//! HRIS portal session core
//!
//! In-memory state and rules behind a single-user HR portal: employee
//! records, project approvals, a document library that pays points, and
//! the points economy those points feed (ledger, membership tiers,
//! achievements, and a redemption marketplace).
//!
//! [`PortalState`] is the root. A rendering shell owns one per session,
//! calls its action methods, and re-reads its projections afterwards.
//!
//! ```
//! use hris_portal::{Config, PortalState};
//!
//! let mut state = PortalState::new(Config::default())?;
//! assert!(!state.attempt_purchase(500));
//! assert!(state.attempt_purchase(100));
//! assert_eq!(state.balance(), 350);
//! # Ok::<(), shared::AppError>(())
//! ```

pub mod core;
pub mod dashboard;
pub mod marketplace;
pub mod notify;
pub mod records;
pub mod rewards;
pub mod seed;
pub mod utils;

pub use crate::core::state::UploadOutcome;
pub use crate::core::{Config, PortalState, StockPolicy};
pub use dashboard::{ActivityItem, DashboardSummary, RewardsOverview, TierCard};
pub use notify::NotificationFeed;

pub use shared::error::{AppError, AppResult, ErrorCode};
