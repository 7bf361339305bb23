//! Command handling seams
//!
//! Actions receive a [`CommandContext`], which is the only way they can
//! look up or persist entities. The context wraps an open write
//! transaction, so everything an action reads comes from one snapshot.

use super::manager::ManagerResult;
use super::storage::WriteTxn;
use shared::table::{OrderTable, SeatingPolicy, TableError, TableEvent, TableGroup, TableResult};

/// Command metadata copied onto every event
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub operator_id: i64,
    pub operator_name: String,
    pub timestamp: i64,
}

/// One command type
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>>;
}

/// Entity access for actions
pub struct CommandContext<'a> {
    txn: WriteTxn<'a>,
    policy: SeatingPolicy,
}

impl<'a> CommandContext<'a> {
    pub fn new(txn: WriteTxn<'a>, policy: SeatingPolicy) -> Self {
        Self { txn, policy }
    }

    pub fn policy(&self) -> &SeatingPolicy {
        &self.policy
    }

    /// Table with its orders attached, or `NotFound`
    pub fn resolve_table(&self, table_id: i64) -> TableResult<OrderTable> {
        self.txn
            .table(table_id)
            .ok_or(TableError::TableNotFound(table_id))
    }

    /// Resolve every id in order; the first unknown id fails
    pub fn resolve_tables(&self, table_ids: &[i64]) -> TableResult<Vec<OrderTable>> {
        table_ids.iter().map(|&id| self.resolve_table(id)).collect()
    }

    pub fn resolve_group(&self, group_id: i64) -> TableResult<TableGroup> {
        self.txn
            .group(group_id)
            .ok_or(TableError::GroupNotFound(group_id))
    }

    pub fn persist_table(&mut self, table: OrderTable) -> ManagerResult<i64> {
        Ok(self.txn.put_table(table)?)
    }

    pub fn persist_group(&mut self, group: TableGroup) {
        self.txn.put_group(group);
    }

    pub fn discard_group(&mut self, group_id: i64) {
        self.txn.remove_group(group_id);
    }

    pub fn allocate_group_id(&mut self) -> ManagerResult<i64> {
        Ok(self.txn.allocate_group_id()?)
    }

    pub fn next_sequence(&mut self) -> u64 {
        self.txn.next_sequence()
    }

    pub fn into_txn(self) -> WriteTxn<'a> {
        self.txn
    }
}
