//! Shared types for the seating core
//!
//! Domain entities, command/event types and the error system used by the
//! service layer and by any collaborator that drives it.

pub mod error;
pub mod table;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode, ErrorKind};
pub use table::{
    CommandError, CommandResponse, Order, OrderStatus, OrderTable, SeatingPolicy, TableCommand,
    TableCommandPayload, TableError, TableEvent, TableGroup,
};
