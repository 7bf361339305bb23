//! CreateGroup command handler
//!
//! Resolves every requested table, then forms the group. Members are
//! persisted only after formation succeeds, so a rejected request leaves
//! every table untouched.

use tracing::info;

use crate::tables::manager::ManagerResult;
use crate::tables::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::table::{TableEvent, TableEventPayload, TableEventType, TableGroup};

#[derive(Debug, Clone)]
pub struct CreateGroupAction {
    pub table_ids: Vec<i64>,
}

impl CommandHandler for CreateGroupAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>> {
        let mut candidates = ctx.resolve_tables(&self.table_ids)?;

        let group_id = ctx.allocate_group_id()?;
        let group = TableGroup::create(group_id, &mut candidates, metadata.timestamp)?;

        for table in candidates {
            ctx.persist_table(table)?;
        }
        let table_ids = group.order_table_ids().to_vec();
        let created_at = group.created_at();
        ctx.persist_group(group);

        info!(group_id, ?table_ids, "Table group created");

        let seq = ctx.next_sequence();
        Ok(vec![TableEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_id,
            metadata.operator_name.clone(),
            TableEventType::GroupCreated,
            TableEventPayload::GroupCreated {
                group_id,
                table_ids,
                created_at,
            },
        )])
    }
}
