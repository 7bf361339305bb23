//! Table events - immutable facts recorded after command processing

use crate::types::Timestamp;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Table event - immutable audit record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEvent {
    pub event_id: String,
    /// Global sequence number (for ordering and replay)
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: Timestamp,
    /// Command that triggered this event
    pub command_id: String,
    pub operator_id: i64,
    pub operator_name: String,
    pub event_type: TableEventType,
    pub payload: TableEventPayload,
}

impl TableEvent {
    pub fn new(
        sequence: u64,
        command_id: String,
        operator_id: i64,
        operator_name: String,
        event_type: TableEventType,
        payload: TableEventPayload,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            sequence,
            timestamp: now_millis(),
            command_id,
            operator_id,
            operator_name,
            event_type,
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableEventType {
    TableCreated,
    EmptyChanged,
    GuestsChanged,
    GroupCreated,
    GroupDissolved,
}

impl std::fmt::Display for TableEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableEventType::TableCreated => write!(f, "TABLE_CREATED"),
            TableEventType::EmptyChanged => write!(f, "EMPTY_CHANGED"),
            TableEventType::GuestsChanged => write!(f, "GUESTS_CHANGED"),
            TableEventType::GroupCreated => write!(f, "GROUP_CREATED"),
            TableEventType::GroupDissolved => write!(f, "GROUP_DISSOLVED"),
        }
    }
}

/// Event payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableEventPayload {
    TableCreated {
        table_id: i64,
        number_of_guests: i32,
        empty: bool,
    },
    EmptyChanged {
        table_id: i64,
        empty: bool,
    },
    GuestsChanged {
        table_id: i64,
        previous: i32,
        number_of_guests: i32,
    },
    GroupCreated {
        group_id: i64,
        table_ids: Vec<i64>,
        created_at: Timestamp,
    },
    GroupDissolved {
        group_id: i64,
        table_ids: Vec<i64>,
    },
}
