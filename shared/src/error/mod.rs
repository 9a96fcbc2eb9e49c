//! Unified error system for the HRIS portal
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Uniform result envelope for a rendering shell
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, required fields)
//! - 1xxx: Points ledger errors
//! - 2xxx: Marketplace errors
//! - 4xxx: Employee errors
//! - 5xxx: Project errors
//! - 6xxx: Document errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::required_field("email");
//! assert_eq!(err.code, ErrorCode::RequiredField);
//!
//! let err = AppError::insufficient_points(500, 450);
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(1001));
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
