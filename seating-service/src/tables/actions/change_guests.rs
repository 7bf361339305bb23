//! ChangeNumberOfGuests command handler

use tracing::info;

use crate::tables::manager::ManagerResult;
use crate::tables::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::table::{TableEvent, TableEventPayload, TableEventType};

#[derive(Debug, Clone)]
pub struct ChangeNumberOfGuestsAction {
    pub table_id: i64,
    pub number_of_guests: i32,
}

impl CommandHandler for ChangeNumberOfGuestsAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>> {
        let mut table = ctx.resolve_table(self.table_id)?;
        let previous = table.number_of_guests();
        table.change_number_of_guests(self.number_of_guests)?;
        ctx.persist_table(table)?;

        info!(
            table_id = self.table_id,
            previous,
            number_of_guests = self.number_of_guests,
            "Number of guests changed"
        );

        let seq = ctx.next_sequence();
        Ok(vec![TableEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_id,
            metadata.operator_name.clone(),
            TableEventType::GuestsChanged,
            TableEventPayload::GuestsChanged {
                table_id: self.table_id,
                previous,
                number_of_guests: self.number_of_guests,
            },
        )])
    }
}
