//! Shared types for the HRIS portal
//!
//! Domain models, the unified error system, notification messages and
//! small utilities used by the portal crate and any rendering shell.

pub mod error;
pub mod message;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use message::{Notification, NotificationLevel};
pub use types::{Points, RecordId, Timestamp};
