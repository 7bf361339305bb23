use super::*;

#[test]
fn test_create_table() {
    let manager = create_test_manager();

    let table_id = create_table(&manager, 0, true);

    let table = manager.get_table(table_id).unwrap();
    assert_eq!(table.id(), Some(table_id));
    assert_eq!(table.number_of_guests(), 0);
    assert!(table.is_empty());
    assert!(table.table_group_id().is_none());
    assert!(table.orders().is_empty());
}

#[test]
fn test_create_table_with_negative_guests_fails() {
    let manager = create_test_manager();

    let resp = manager.execute_command(command(TableCommandPayload::CreateTable {
        number_of_guests: -3,
        empty: false,
    }));

    assert_rejected(
        &resp,
        ErrorCode::ValueOutOfRange,
        ErrorKind::InvalidArgument,
        "guest count must be non-negative",
    );
    assert!(manager.list_tables().is_empty());
}

#[test]
fn test_idempotency() {
    let manager = create_test_manager();
    let cmd = command(TableCommandPayload::CreateTable {
        number_of_guests: 2,
        empty: false,
    });

    let response1 = manager.execute_command(cmd.clone());
    assert!(response1.success);
    assert!(response1.table_id.is_some());

    let (response2, events) = manager.execute_command_with_events(cmd);
    assert!(response2.success);
    assert!(response2.table_id.is_none());
    assert!(events.is_empty());
    assert_eq!(manager.list_tables().len(), 1);
    assert_eq!(manager.get_current_sequence(), 1);
}

#[test]
fn test_change_guests_negative_keeps_previous_count() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 4, false);

    let resp = manager.execute_command(command(TableCommandPayload::ChangeNumberOfGuests {
        table_id,
        number_of_guests: -1,
    }));

    assert_rejected(
        &resp,
        ErrorCode::ValueOutOfRange,
        ErrorKind::InvalidArgument,
        "guest count must be non-negative",
    );
    assert_eq!(manager.get_table(table_id).unwrap().number_of_guests(), 4);
}

#[test]
fn test_change_guests_on_empty_table_fails() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 0, true);

    let resp = manager.execute_command(command(TableCommandPayload::ChangeNumberOfGuests {
        table_id,
        number_of_guests: 3,
    }));

    assert_rejected(
        &resp,
        ErrorCode::TableAlreadyEmpty,
        ErrorKind::InvalidStateTransition,
        "table is empty",
    );
}

#[test]
fn test_negative_guests_on_empty_table_reports_argument_first() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 0, true);

    let resp = manager.execute_command(command(TableCommandPayload::ChangeNumberOfGuests {
        table_id,
        number_of_guests: -1,
    }));

    assert_eq!(resp.error.unwrap().kind, ErrorKind::InvalidArgument);
}

#[test]
fn test_change_guests_success() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 2, false);

    let (resp, events) =
        manager.execute_command_with_events(command(TableCommandPayload::ChangeNumberOfGuests {
            table_id,
            number_of_guests: 5,
        }));

    assert!(resp.success);
    assert_eq!(
        events[0].payload,
        TableEventPayload::GuestsChanged {
            table_id,
            previous: 2,
            number_of_guests: 5,
        }
    );
    assert_eq!(manager.get_table(table_id).unwrap().number_of_guests(), 5);
}

#[test]
fn test_change_empty_twice_is_stable() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 2, false);

    for _ in 0..2 {
        let resp = manager.execute_command(command(TableCommandPayload::ChangeEmpty {
            table_id,
            empty: true,
        }));
        assert!(resp.success);
    }

    let table = manager.get_table(table_id).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.number_of_guests(), 2);
}

#[test]
fn test_change_empty_with_active_order_fails() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 2, false);
    manager
        .record_order(Order::new(table_id, OrderStatus::Meal))
        .unwrap();

    let resp = manager.execute_command(command(TableCommandPayload::ChangeEmpty {
        table_id,
        empty: true,
    }));

    assert_rejected(
        &resp,
        ErrorCode::TableHasOrders,
        ErrorKind::InvalidStateTransition,
        "an active order exists",
    );
    assert!(!manager.get_table(table_id).unwrap().is_empty());
}

#[test]
fn test_change_empty_after_order_completion_succeeds() {
    let manager = create_test_manager();
    let table_id = create_table(&manager, 2, false);
    let order = manager
        .record_order(Order::new(table_id, OrderStatus::Cooking))
        .unwrap();
    manager
        .record_order(Order::restore(
            order.id().unwrap(),
            table_id,
            OrderStatus::Completion,
        ))
        .unwrap();

    let resp = manager.execute_command(command(TableCommandPayload::ChangeEmpty {
        table_id,
        empty: true,
    }));

    assert!(resp.success);
    assert!(manager.get_table(table_id).unwrap().is_empty());
}

#[test]
fn test_change_empty_unknown_table() {
    let manager = create_test_manager();

    let resp = manager.execute_command(command(TableCommandPayload::ChangeEmpty {
        table_id: 404,
        empty: true,
    }));

    assert_rejected(
        &resp,
        ErrorCode::TableNotFound,
        ErrorKind::NotFound,
        "table does not exist",
    );
}

#[test]
fn test_record_order_for_unknown_table_is_not_found() {
    let manager = create_test_manager();

    let err = manager
        .record_order(Order::new(9, OrderStatus::Cooking))
        .unwrap_err();

    let err: shared::table::CommandError = err.into();
    assert_eq!(err.code, ErrorCode::TableNotFound);
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[test]
fn test_sequence_monotonically_increasing() {
    let manager = create_test_manager();
    let mut rx = manager.subscribe();

    let table_id = create_table(&manager, 0, true);
    manager.execute_command(command(TableCommandPayload::ChangeEmpty {
        table_id,
        empty: false,
    }));
    manager.execute_command(command(TableCommandPayload::ChangeNumberOfGuests {
        table_id,
        number_of_guests: 3,
    }));

    let sequences: Vec<u64> = std::iter::from_fn(|| rx.try_recv().ok())
        .map(|e| e.sequence)
        .collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    assert_eq!(manager.get_current_sequence(), 3);
}

#[tokio::test]
async fn test_event_broadcast() {
    let manager = create_test_manager();
    let mut rx = manager.subscribe();

    let cmd = command(TableCommandPayload::CreateTable {
        number_of_guests: 0,
        empty: true,
    });
    let command_id = cmd.command_id.clone();
    let resp = manager.execute_command(cmd);
    assert!(resp.success);

    let event = rx.recv().await.unwrap();
    assert_eq!(event.command_id, command_id);
    assert_eq!(event.operator_name, "Test Operator");
    assert_eq!(
        event.payload,
        TableEventPayload::TableCreated {
            table_id: resp.table_id.unwrap(),
            number_of_guests: 0,
            empty: true,
        }
    );
}

#[tokio::test]
async fn test_rejected_command_broadcasts_nothing() {
    let manager = create_test_manager();
    let mut rx = manager.subscribe();

    let resp = manager.execute_command(command(TableCommandPayload::ChangeEmpty {
        table_id: 1,
        empty: true,
    }));
    assert!(!resp.success);

    assert!(matches!(
        rx.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}

#[test]
fn test_rejected_response_wire_format() {
    let manager = create_test_manager();

    let resp = manager.execute_command(command(TableCommandPayload::ChangeEmpty {
        table_id: 3,
        empty: false,
    }));

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], 7001);
    assert_eq!(json["error"]["kind"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "table does not exist");
    assert_eq!(json["error"]["details"]["table_id"], 3);
    assert!(json.get("table_id").is_none());
}
