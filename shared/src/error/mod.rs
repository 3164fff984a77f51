//! Unified error system for the POS admin panel
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Profile errors
//! - 2xxx: Outlet errors
//! - 6xxx: Catalog errors
//! - 7xxx: Table errors
//! - 8xxx: User errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//! use shared::DataResult;
//!
//! // Field-bound error, as raised by a failed uniqueness check
//! let err = AppError::duplicate(ErrorCode::CategoryNameExists, "name");
//! assert_eq!(err.field(), Some("name"));
//!
//! // Convert to an intent result
//! let result = DataResult::err(&err);
//! assert!(!result.success);
//! assert_eq!(result.code, Some(6103));
//! assert_eq!(result.field.as_deref(), Some("name"));
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, FIELD_DETAIL};
