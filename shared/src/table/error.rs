//! Seating rule violations

use crate::error::{AppError, ErrorCode, ErrorKind};
use thiserror::Error;

/// Errors raised by table and group operations
///
/// Display strings are the caller-facing messages and are passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("guest count must be non-negative")]
    NegativeGuestCount(i32),

    #[error("table is empty")]
    TableEmpty,

    #[error("table belongs to a group")]
    TableInGroup(i64),

    #[error("an active order exists")]
    ActiveOrderExists,

    #[error("table not eligible for grouping")]
    NotEligibleForGrouping,

    #[error("at least two tables required")]
    InsufficientTables(usize),

    #[error("at least two distinct tables required")]
    DuplicateTable(i64),

    #[error("table not empty or already grouped")]
    TableNotGroupable(i64),

    #[error("table does not exist")]
    TableNotFound(i64),

    /// Candidate that was never persisted and so cannot be referenced
    #[error("table does not exist")]
    TableNotPersisted,

    #[error("table group does not exist")]
    GroupNotFound(i64),

    #[error("a member table has an active order")]
    GroupHasActiveOrders(i64),

    #[error("member tables do not match the group")]
    MembersMismatch(i64),
}

impl TableError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            TableError::NegativeGuestCount(_) => ErrorCode::ValueOutOfRange,
            TableError::TableEmpty => ErrorCode::TableAlreadyEmpty,
            TableError::TableInGroup(_) => ErrorCode::TableInGroup,
            TableError::ActiveOrderExists => ErrorCode::TableHasOrders,
            TableError::NotEligibleForGrouping | TableError::TableNotGroupable(_) => {
                ErrorCode::TableNotGroupable
            }
            TableError::InsufficientTables(_) => ErrorCode::TableGroupTooSmall,
            TableError::DuplicateTable(_) => ErrorCode::TableGroupDuplicateTable,
            TableError::TableNotFound(_) | TableError::TableNotPersisted => {
                ErrorCode::TableNotFound
            }
            TableError::GroupNotFound(_) => ErrorCode::TableGroupNotFound,
            TableError::GroupHasActiveOrders(_) => ErrorCode::TableGroupHasActiveOrders,
            TableError::MembersMismatch(_) => ErrorCode::InvalidRequest,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error_code().kind()
    }
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        let app = AppError::with_message(err.error_code(), err.to_string());
        match err {
            TableError::NegativeGuestCount(n) => app.with_detail("number_of_guests", n),
            TableError::InsufficientTables(n) => app.with_detail("table_count", n),
            TableError::TableInGroup(id) => app.with_detail("group_id", id),
            TableError::DuplicateTable(id)
            | TableError::TableNotGroupable(id)
            | TableError::TableNotFound(id) => app.with_detail("table_id", id),
            TableError::GroupNotFound(id)
            | TableError::GroupHasActiveOrders(id)
            | TableError::MembersMismatch(id) => app.with_detail("group_id", id),
            TableError::TableEmpty
            | TableError::ActiveOrderExists
            | TableError::NotEligibleForGrouping
            | TableError::TableNotPersisted => app,
        }
    }
}

pub type TableResult<T> = Result<T, TableError>;
