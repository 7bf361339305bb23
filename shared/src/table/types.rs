//! Command response types

use super::error::TableError;
use crate::error::{AppError, ErrorCode, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Command response sent back to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    pub success: bool,
    /// New table ID (only for CreateTable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<i64>,
    /// New group ID (only for CreateGroup)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            table_id: None,
            group_id: None,
            error: None,
        }
    }

    pub fn table_created(command_id: String, table_id: i64) -> Self {
        Self {
            table_id: Some(table_id),
            ..Self::success(command_id)
        }
    }

    pub fn group_created(command_id: String, group_id: i64) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::success(command_id)
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            table_id: None,
            group_id: None,
            error: Some(error),
        }
    }

    /// Already processed; reported as success without effects
    pub fn duplicate(command_id: String) -> Self {
        Self::success(command_id)
    }
}

/// Command error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandError {
    pub code: ErrorCode,
    pub kind: ErrorKind,
    pub message: String,
    /// Ids of the offending table or group, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl CommandError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError::with_message(code, message).into()
    }
}

impl From<TableError> for CommandError {
    fn from(err: TableError) -> Self {
        AppError::from(err).into()
    }
}

impl From<AppError> for CommandError {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code,
            kind: err.kind(),
            message: err.message,
            details: err.details,
        }
    }
}
