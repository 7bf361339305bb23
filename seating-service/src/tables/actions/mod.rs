//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::tables::manager::ManagerResult;
use crate::tables::traits::{CommandContext, CommandHandler, CommandMetadata};
use shared::table::{TableCommand, TableCommandPayload, TableEvent};

mod change_empty;
mod change_guests;
mod create_group;
mod create_table;
mod ungroup;

pub use change_empty::ChangeEmptyAction;
pub use change_guests::ChangeNumberOfGuestsAction;
pub use create_group::CreateGroupAction;
pub use create_table::CreateTableAction;
pub use ungroup::UngroupAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    CreateTable(CreateTableAction),
    ChangeEmpty(ChangeEmptyAction),
    ChangeNumberOfGuests(ChangeNumberOfGuestsAction),
    CreateGroup(CreateGroupAction),
    Ungroup(UngroupAction),
}

impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> ManagerResult<Vec<TableEvent>> {
        match self {
            CommandAction::CreateTable(action) => action.execute(ctx, metadata),
            CommandAction::ChangeEmpty(action) => action.execute(ctx, metadata),
            CommandAction::ChangeNumberOfGuests(action) => action.execute(ctx, metadata),
            CommandAction::CreateGroup(action) => action.execute(ctx, metadata),
            CommandAction::Ungroup(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert TableCommand to CommandAction
///
/// This is the ONLY place with a match on TableCommandPayload.
impl From<&TableCommand> for CommandAction {
    fn from(cmd: &TableCommand) -> Self {
        match &cmd.payload {
            TableCommandPayload::CreateTable {
                number_of_guests,
                empty,
            } => CommandAction::CreateTable(CreateTableAction {
                number_of_guests: *number_of_guests,
                empty: *empty,
            }),
            TableCommandPayload::ChangeEmpty { table_id, empty } => {
                CommandAction::ChangeEmpty(ChangeEmptyAction {
                    table_id: *table_id,
                    empty: *empty,
                })
            }
            TableCommandPayload::ChangeNumberOfGuests {
                table_id,
                number_of_guests,
            } => CommandAction::ChangeNumberOfGuests(ChangeNumberOfGuestsAction {
                table_id: *table_id,
                number_of_guests: *number_of_guests,
            }),
            TableCommandPayload::CreateGroup { table_ids } => {
                CommandAction::CreateGroup(CreateGroupAction {
                    table_ids: table_ids.clone(),
                })
            }
            TableCommandPayload::Ungroup { group_id } => {
                CommandAction::Ungroup(UngroupAction {
                    group_id: *group_id,
                })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tables::storage::SeatingStorage;
    use shared::table::OrderTable;

    pub(crate) fn create_test_metadata() -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            operator_id: 1,
            operator_name: "Test User".to_string(),
            timestamp: 1_700_000_000_000,
        }
    }

    /// Commit a table straight into storage and return its id
    pub(crate) fn seed_table(storage: &SeatingStorage, guests: i32, empty: bool) -> i64 {
        let mut txn = storage.begin_write();
        let id = txn
            .put_table(OrderTable::new(guests, empty).unwrap())
            .unwrap();
        txn.commit();
        id
    }

    #[test]
    fn test_payload_maps_to_action() {
        let cmd = TableCommand::new(
            1,
            "Test User".to_string(),
            TableCommandPayload::CreateGroup {
                table_ids: vec![3, 1],
            },
        );
        match CommandAction::from(&cmd) {
            CommandAction::CreateGroup(action) => assert_eq!(action.table_ids, vec![3, 1]),
            _ => panic!("expected CreateGroup"),
        }
    }
}
