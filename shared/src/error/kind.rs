//! Error kind classification
//!
//! Coarser than [`ErrorCode`]: tells a caller whether the input was
//! malformed, the entity state forbade the change, or a reference did
//! not resolve.

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Malformed input (negative guest count, too few grouping candidates)
    InvalidArgument,
    /// Current entity state does not allow the change
    InvalidStateTransition,
    /// Referenced table or group does not exist
    NotFound,
    /// Failure outside the domain rules
    Internal,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidStateTransition => "InvalidStateTransition",
            Self::NotFound => "NotFound",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ErrorCode {
    /// Get the error kind for this error code
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::TableNotFound
            | ErrorCode::TableGroupNotFound => ErrorKind::NotFound,

            ErrorCode::InvalidRequest
            | ErrorCode::ValueOutOfRange
            | ErrorCode::TableGroupTooSmall
            | ErrorCode::TableGroupDuplicateTable => ErrorKind::InvalidArgument,

            ErrorCode::TableAlreadyEmpty
            | ErrorCode::TableInGroup
            | ErrorCode::TableHasOrders
            | ErrorCode::TableNotGroupable
            | ErrorCode::TableGroupHasActiveOrders => ErrorKind::InvalidStateTransition,

            ErrorCode::InternalError => ErrorKind::Internal,
        }
    }
}
