//! Common types for the shared crate
//!
//! Utility types used across the workspace

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Points amount. Balances can never go negative, so the whole economy is unsigned.
pub type Points = u64;

/// Record identifier, unique within its owning list
pub type RecordId = u64;
