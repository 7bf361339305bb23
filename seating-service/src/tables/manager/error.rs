use super::super::storage::StorageError;
use shared::error::{AppError, ErrorCode};
use shared::table::{CommandError, TableError};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Table(e) => e.into(),
            ManagerError::Storage(StorageError::TableNotFound(id)) => {
                TableError::TableNotFound(id).into()
            }
            ManagerError::Storage(e @ StorageError::IdSpaceExhausted(what)) => {
                tracing::error!(error = %e, "Storage error occurred");
                AppError::with_message(ErrorCode::InternalError, e.to_string())
                    .with_detail("resource", what)
            }
        }
    }
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        AppError::from(err).into()
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
