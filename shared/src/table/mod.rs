//! Seating domain
//!
//! Tables, table groups and the order status they depend on:
//! - **order**: order status and the "active" predicate
//! - **order_table**: guest count and empty flag rules
//! - **table_group**: group formation and dissolution
//! - **policy**: deployment choices for dissolution
//! - Commands, events and responses exchanged with the service layer
//!
//! Entities refer to each other by `i64` identity. Every operation checks
//! all of its preconditions before mutating anything.

pub mod command;
pub mod error;
pub mod event;
pub mod order;
pub mod order_table;
pub mod policy;
pub mod table_group;
pub mod types;

// Re-exports
pub use command::{TableCommand, TableCommandPayload};
pub use error::{TableError, TableResult};
pub use event::{TableEvent, TableEventPayload, TableEventType};
pub use order::{Order, OrderStatus, is_active};
pub use order_table::OrderTable;
pub use policy::{InvalidPolicy, ReleaseEmptiness, SeatingPolicy, UngroupPolicy};
pub use table_group::{MIN_GROUP_SIZE, TableGroup};
pub use types::{CommandError, CommandResponse};
