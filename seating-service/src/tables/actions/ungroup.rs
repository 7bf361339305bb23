//! Ungroup command handler

use tracing::info;

use crate::tables::manager::ManagerResult;
use crate::tables::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::table::{TableEvent, TableEventPayload, TableEventType};

#[derive(Debug, Clone)]
pub struct UngroupAction {
    pub group_id: i64,
}

impl CommandHandler for UngroupAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>> {
        let group = ctx.resolve_group(self.group_id)?;
        let table_ids = group.order_table_ids().to_vec();
        let mut members = ctx.resolve_tables(&table_ids)?;

        let policy = *ctx.policy();
        group.ungroup(&mut members, &policy)?;

        for table in members {
            ctx.persist_table(table)?;
        }
        ctx.discard_group(self.group_id);

        info!(group_id = self.group_id, ?table_ids, "Table group dissolved");

        let seq = ctx.next_sequence();
        Ok(vec![TableEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_id,
            metadata.operator_name.clone(),
            TableEventType::GroupDissolved,
            TableEventPayload::GroupDissolved {
                group_id: self.group_id,
                table_ids,
            },
        )])
    }
}
