//! Order status as seen by the seating rules
//!
//! Orders are created and moved through their lifecycle elsewhere; tables
//! and groups only read the status to decide whether they may change.

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Kitchen is preparing the order
    Cooking,
    /// Guests are eating
    Meal,
    /// Order is closed
    Completion,
}

impl OrderStatus {
    /// See [`is_active`]
    #[inline]
    pub fn is_active(&self) -> bool {
        is_active(*self)
    }
}

/// Whether an order in `status` blocks table and group state changes.
///
/// This is the only place that defines "active".
#[inline]
pub fn is_active(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Cooking | OrderStatus::Meal)
}

/// Order placed against a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: Option<i64>,
    order_table_id: i64,
    status: OrderStatus,
}

impl Order {
    pub fn new(order_table_id: i64, status: OrderStatus) -> Self {
        Self {
            id: None,
            order_table_id,
            status,
        }
    }

    /// Rebuild an order that already has an identity
    pub fn restore(id: i64, order_table_id: i64, status: OrderStatus) -> Self {
        Self {
            id: Some(id),
            order_table_id,
            status,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn order_table_id(&self) -> i64 {
        self.order_table_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        is_active(self.status)
    }

    /// Identity assigned by the persistence collaborator
    pub fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
