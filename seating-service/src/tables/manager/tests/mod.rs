use super::*;
use shared::error::{ErrorCode, ErrorKind};
use shared::table::{OrderStatus, ReleaseEmptiness, TableCommandPayload, UngroupPolicy};

mod test_tables;

fn create_test_manager() -> SeatingManager {
    create_test_manager_with_policy(SeatingPolicy::default())
}

fn create_test_manager_with_policy(policy: SeatingPolicy) -> SeatingManager {
    SeatingManager::with_storage(Arc::new(SeatingStorage::new()), policy)
}

fn command(payload: TableCommandPayload) -> TableCommand {
    TableCommand::new(1, "Test Operator".to_string(), payload)
}

// ========================================================================
// Helpers: register tables and groups through the command path
// ========================================================================

fn create_table(manager: &SeatingManager, number_of_guests: i32, empty: bool) -> i64 {
    let resp = manager.execute_command(command(TableCommandPayload::CreateTable {
        number_of_guests,
        empty,
    }));
    assert!(resp.success, "Failed to create table: {:?}", resp.error);
    resp.table_id.unwrap()
}

fn create_group(manager: &SeatingManager, table_ids: &[i64]) -> i64 {
    let resp = manager.execute_command(command(TableCommandPayload::CreateGroup {
        table_ids: table_ids.to_vec(),
    }));
    assert!(resp.success, "Failed to create group: {:?}", resp.error);
    resp.group_id.unwrap()
}

fn assert_rejected(resp: &CommandResponse, code: ErrorCode, kind: ErrorKind, message: &str) {
    assert!(!resp.success);
    let err = resp.error.as_ref().expect("error expected");
    assert_eq!(err.code, code);
    assert_eq!(err.kind, kind);
    assert_eq!(err.message, message);
}
