//! Data models
//!
//! Plain serde records held in the portal's in-memory lists.
//! All IDs are `u64`, unique within their owning list.

pub mod achievement;
pub mod document;
pub mod employee;
pub mod leaderboard;
pub mod marketplace;
pub mod points;
pub mod project;
pub mod tier;
pub mod tone;

// Re-exports
pub use achievement::*;
pub use document::*;
pub use employee::*;
pub use leaderboard::*;
pub use marketplace::*;
pub use points::*;
pub use project::*;
pub use tier::*;
pub use tone::*;
