//! Unified error codes for the seating core
//!
//! Error codes are organized by range:
//! - 0xxx: General errors
//! - 7xxx: Table errors (74xx: table groups)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is already empty
    TableAlreadyEmpty = 7003,
    /// Table belongs to a group
    TableInGroup = 7004,
    /// Table has active orders
    TableHasOrders = 7104,
    /// Table group not found
    TableGroupNotFound = 7401,
    /// Too few tables to form a group
    TableGroupTooSmall = 7402,
    /// Table is not empty or already grouped
    TableNotGroupable = 7403,
    /// Same table listed twice in a group request
    TableGroupDuplicateTable = 7404,
    /// A member table of the group has an active order
    TableGroupHasActiveOrders = 7405,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7003 => Ok(ErrorCode::TableAlreadyEmpty),
            7004 => Ok(ErrorCode::TableInGroup),
            7104 => Ok(ErrorCode::TableHasOrders),
            7401 => Ok(ErrorCode::TableGroupNotFound),
            7402 => Ok(ErrorCode::TableGroupTooSmall),
            7403 => Ok(ErrorCode::TableNotGroupable),
            7404 => Ok(ErrorCode::TableGroupDuplicateTable),
            7405 => Ok(ErrorCode::TableGroupHasActiveOrders),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
