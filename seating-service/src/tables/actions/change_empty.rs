//! ChangeEmpty command handler

use tracing::info;

use crate::tables::manager::ManagerResult;
use crate::tables::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::table::{TableEvent, TableEventPayload, TableEventType};

#[derive(Debug, Clone)]
pub struct ChangeEmptyAction {
    pub table_id: i64,
    pub empty: bool,
}

impl CommandHandler for ChangeEmptyAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>> {
        let mut table = ctx.resolve_table(self.table_id)?;
        table.change_empty(self.empty)?;
        ctx.persist_table(table)?;

        info!(table_id = self.table_id, empty = self.empty, "Table empty flag changed");

        let seq = ctx.next_sequence();
        Ok(vec![TableEvent::new(
            seq,
            metadata.command_id.clone(),
            metadata.operator_id,
            metadata.operator_name.clone(),
            TableEventType::EmptyChanged,
            TableEventPayload::EmptyChanged {
                table_id: self.table_id,
                empty: self.empty,
            },
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::actions::tests::{create_test_metadata, seed_table};
    use crate::tables::manager::ManagerError;
    use crate::tables::storage::SeatingStorage;
    use shared::table::{Order, OrderStatus, SeatingPolicy, TableError};

    #[test]
    fn test_change_empty_success() {
        let storage = SeatingStorage::new();
        let table_id = seed_table(&storage, 3, false);
        let mut ctx = CommandContext::new(storage.begin_write(), SeatingPolicy::default());

        let action = ChangeEmptyAction {
            table_id,
            empty: true,
        };
        let events = action.execute(&mut ctx, &create_test_metadata()).unwrap();

        assert_eq!(events[0].event_type, TableEventType::EmptyChanged);
        assert!(ctx.resolve_table(table_id).unwrap().is_empty());
    }

    #[test]
    fn test_change_empty_unknown_table() {
        let storage = SeatingStorage::new();
        let mut ctx = CommandContext::new(storage.begin_write(), SeatingPolicy::default());

        let action = ChangeEmptyAction {
            table_id: 99,
            empty: true,
        };
        let result = action.execute(&mut ctx, &create_test_metadata());
        assert!(matches!(
            result,
            Err(ManagerError::Table(TableError::TableNotFound(99)))
        ));
    }

    #[test]
    fn test_change_empty_with_cooking_order_fails() {
        let storage = SeatingStorage::new();
        let table_id = seed_table(&storage, 3, false);
        storage
            .record_order(Order::new(table_id, OrderStatus::Cooking))
            .unwrap();
        let mut ctx = CommandContext::new(storage.begin_write(), SeatingPolicy::default());

        let action = ChangeEmptyAction {
            table_id,
            empty: true,
        };
        let result = action.execute(&mut ctx, &create_test_metadata());
        assert!(matches!(
            result,
            Err(ManagerError::Table(TableError::ActiveOrderExists))
        ));
        assert!(!ctx.resolve_table(table_id).unwrap().is_empty());
    }
}
