//! CreateTable command handler
//!
//! Registers a new table. The identity comes from storage.

use tracing::info;

use crate::tables::manager::ManagerResult;
use crate::tables::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::table::{OrderTable, TableEvent, TableEventPayload, TableEventType};

#[derive(Debug, Clone)]
pub struct CreateTableAction {
    pub number_of_guests: i32,
    pub empty: bool,
}

impl CommandHandler for CreateTableAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>> {
        let table = OrderTable::new(self.number_of_guests, self.empty)?;
        let table_id = ctx.persist_table(table)?;

        info!(
            table_id,
            number_of_guests = self.number_of_guests,
            empty = self.empty,
            "Table created"
        );

        let seq = ctx.next_sequence();
        Ok(vec![TableEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_id,
            metadata.operator_name.clone(),
            TableEventType::TableCreated,
            TableEventPayload::TableCreated {
                table_id,
                number_of_guests: self.number_of_guests,
                empty: self.empty,
            },
        )])
    }
}
