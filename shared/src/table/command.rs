//! Table commands - requests from collaborators to change seating state

use crate::types::Timestamp;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Table command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCommand {
    /// Unique command ID, used for idempotency
    pub command_id: String,
    pub operator_id: i64,
    /// Operator name (snapshot for audit)
    pub operator_name: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: Timestamp,
    pub payload: TableCommandPayload,
}

impl TableCommand {
    pub fn new(operator_id: i64, operator_name: String, payload: TableCommandPayload) -> Self {
        Self {
            command_id: Uuid::new_v4().to_string(),
            operator_id,
            operator_name,
            timestamp: now_millis(),
            payload,
        }
    }
}

/// Command payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableCommandPayload {
    /// Register a new table
    CreateTable { number_of_guests: i32, empty: bool },
    ChangeEmpty { table_id: i64, empty: bool },
    ChangeNumberOfGuests { table_id: i64, number_of_guests: i32 },
    /// Group the listed tables (request order is kept)
    CreateGroup { table_ids: Vec<i64> },
    Ungroup { group_id: i64 },
}

impl TableCommandPayload {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateTable { .. } => "CREATE_TABLE",
            Self::ChangeEmpty { .. } => "CHANGE_EMPTY",
            Self::ChangeNumberOfGuests { .. } => "CHANGE_NUMBER_OF_GUESTS",
            Self::CreateGroup { .. } => "CREATE_GROUP",
            Self::Ungroup { .. } => "UNGROUP",
        }
    }
}
