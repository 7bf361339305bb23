//! SeatingManager - Core command processing and event generation
//!
//! This module handles:
//! - Command validation and processing
//! - Event generation with a global sequence
//! - Atomic commit to the in-memory registry
//! - Event broadcasting
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Idempotency check (command_id)
//!     ├─ 2. Begin write transaction
//!     ├─ 3. Create CommandContext
//!     ├─ 4. Convert command to action and execute
//!     ├─ 5. Mark command processed
//!     ├─ 6. Commit transaction
//!     ├─ 7. Broadcast event(s)
//!     └─ 8. Return response
//! ```

mod error;
pub use error::*;

use super::actions::CommandAction;
use super::storage::SeatingStorage;
use super::traits::{CommandContext, CommandHandler, CommandMetadata};
use crate::core::Config;
use shared::table::{
    CommandResponse, Order, OrderTable, SeatingPolicy, TableCommand, TableEvent,
    TableEventPayload, TableGroup,
};
use std::sync::Arc;
use tokio::sync::broadcast;

/// SeatingManager for command processing
pub struct SeatingManager {
    storage: Arc<SeatingStorage>,
    event_tx: broadcast::Sender<TableEvent>,
    policy: SeatingPolicy,
}

impl std::fmt::Debug for SeatingManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatingManager")
            .field("storage", &"<SeatingStorage>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl SeatingManager {
    /// Create a manager with empty storage, configured from `config`
    pub fn new(config: &Config) -> Self {
        let manager = Self::with_capacity(
            Arc::new(SeatingStorage::new()),
            config.policy(),
            config.event_channel_capacity,
        );
        tracing::info!(policy = ?manager.policy, "SeatingManager started");
        manager
    }

    /// Create a manager over existing storage (for tests and embedding)
    pub fn with_storage(storage: Arc<SeatingStorage>, policy: SeatingPolicy) -> Self {
        Self::with_capacity(storage, policy, Config::DEFAULT_EVENT_CHANNEL_CAPACITY)
    }

    fn with_capacity(storage: Arc<SeatingStorage>, policy: SeatingPolicy, capacity: usize) -> Self {
        // broadcast::channel panics on zero capacity
        let (event_tx, _) = broadcast::channel(capacity.max(1));
        Self {
            storage,
            event_tx,
            policy,
        }
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<TableEvent> {
        self.event_tx.subscribe()
    }

    /// Get the underlying storage
    pub fn storage(&self) -> &SeatingStorage {
        &self.storage
    }

    pub fn policy(&self) -> &SeatingPolicy {
        &self.policy
    }

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: TableCommand) -> CommandResponse {
        self.execute_command_with_events(cmd).0
    }

    /// Execute a command and return both the response and generated events
    ///
    /// Events are broadcast internally as well.
    pub fn execute_command_with_events(
        &self,
        cmd: TableCommand,
    ) -> (CommandResponse, Vec<TableEvent>) {
        let command_id = cmd.command_id.clone();
        let command_type = cmd.payload.name();
        match self.process_command(cmd) {
            Ok((response, events)) => {
                // Broadcast events after successful commit
                for event in &events {
                    if self.event_tx.send(event.clone()).is_err() {
                        tracing::debug!("Event broadcast skipped: no active receivers");
                        break;
                    }
                }
                (response, events)
            }
            Err(err) => {
                tracing::warn!(
                    command_id = %command_id,
                    command_type,
                    error = %err,
                    "Command rejected"
                );
                (CommandResponse::error(command_id, err.into()), vec![])
            }
        }
    }

    /// Process command and return response with events
    fn process_command(
        &self,
        cmd: TableCommand,
    ) -> ManagerResult<(CommandResponse, Vec<TableEvent>)> {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        // 1. Idempotency check (before transaction)
        if self.storage.is_command_processed(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 2. Begin write transaction
        let txn = self.storage.begin_write();

        // Double-check idempotency within transaction
        if txn.is_command_processed(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return Ok((CommandResponse::duplicate(cmd.command_id), vec![]));
        }

        // 3. Create context and metadata
        let mut ctx = CommandContext::new(txn, self.policy);
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            operator_id: cmd.operator_id,
            operator_name: cmd.operator_name.clone(),
            timestamp: cmd.timestamp,
        };

        // 4. Convert to action and execute
        let action: CommandAction = (&cmd).into();
        let events = action.execute(&mut ctx, &metadata)?;

        // 5. Mark command processed
        let mut txn = ctx.into_txn();
        txn.mark_command_processed(&cmd.command_id);

        // 6. Commit transaction
        txn.commit();

        // 7. Return response
        let response = response_for(cmd.command_id.clone(), &events);
        tracing::info!(
            command_id = %cmd.command_id,
            command_type = cmd.payload.name(),
            event_count = events.len(),
            "Command processed successfully"
        );
        Ok((response, events))
    }

    // ========== Order Collaborator ==========

    /// Make an order's status visible to table resolution
    pub fn record_order(&self, order: Order) -> ManagerResult<Order> {
        Ok(self.storage.record_order(order)?)
    }

    // ========== Public Query Methods ==========

    /// Get a table by ID, with its orders attached
    pub fn get_table(&self, table_id: i64) -> Option<OrderTable> {
        self.storage.find_table(table_id)
    }

    /// Get all tables ordered by ID
    pub fn list_tables(&self) -> Vec<OrderTable> {
        self.storage.list_tables()
    }

    pub fn get_group(&self, group_id: i64) -> Option<TableGroup> {
        self.storage.find_group(group_id)
    }

    pub fn list_groups(&self) -> Vec<TableGroup> {
        self.storage.list_groups()
    }

    /// Get current event sequence number
    pub fn get_current_sequence(&self) -> u64 {
        self.storage.current_sequence()
    }
}

/// Surface the identity a creating command produced
fn response_for(command_id: String, events: &[TableEvent]) -> CommandResponse {
    match events.first().map(|e| &e.payload) {
        Some(TableEventPayload::TableCreated { table_id, .. }) => {
            CommandResponse::table_created(command_id, *table_id)
        }
        Some(TableEventPayload::GroupCreated { group_id, .. }) => {
            CommandResponse::group_created(command_id, *group_id)
        }
        _ => CommandResponse::success(command_id),
    }
}

// Make SeatingManager Clone-able via Arc
impl Clone for SeatingManager {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            event_tx: self.event_tx.clone(),
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests;
