//! Unified error system for the seating core
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorKind`]: InvalidArgument / InvalidStateTransition / NotFound
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::with_message(ErrorCode::TableInGroup, "table belongs to a group")
//!     .with_detail("table_id", 3);
//! assert_eq!(err.kind(), ErrorKind::InvalidStateTransition);
//! ```

mod codes;
mod kind;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use kind::ErrorKind;
pub use types::AppError;
