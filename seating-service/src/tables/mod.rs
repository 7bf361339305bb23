//! Table seating module
//!
//! - **manager**: SeatingManager for command processing and event generation
//! - **actions**: one handler per table command
//! - **storage**: in-memory registry with all-or-nothing write transactions
//!
//! # Architecture
//!
//! ```text
//! TableCommand → SeatingManager → Action → WriteTxn → commit
//!                      ↓
//!                  Broadcast
//!                      ↓
//!               All Subscribers
//! ```

pub mod actions;
pub mod manager;
pub mod storage;
pub mod traits;

// Re-exports
pub use manager::{ManagerError, ManagerResult, SeatingManager};
pub use storage::{SeatingStorage, StorageError};

// Re-export shared types for convenience
pub use shared::table::{
    CommandError, CommandResponse, Order, OrderStatus, OrderTable, SeatingPolicy, TableCommand,
    TableCommandPayload, TableEvent, TableEventPayload, TableEventType, TableGroup,
};
