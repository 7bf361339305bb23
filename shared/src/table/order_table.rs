//! Order table (dining table that takes orders)

use super::error::{TableError, TableResult};
use super::order::Order;
use super::policy::ReleaseEmptiness;
use serde::{Deserialize, Serialize};

/// A table guests sit at and orders are placed against.
///
/// The table owns its guest count and empty flag. It refers to its group by
/// identity only; group membership is set and cleared by
/// [`TableGroup`](super::TableGroup), never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderTableRecord")]
pub struct OrderTable {
    id: Option<i64>,
    table_group_id: Option<i64>,
    number_of_guests: i32,
    empty: bool,
    orders: Vec<Order>,
}

/// Wire form of [`OrderTable`]; only reaches the entity through validation
#[derive(Debug, Deserialize)]
struct OrderTableRecord {
    id: Option<i64>,
    table_group_id: Option<i64>,
    number_of_guests: i32,
    empty: bool,
    #[serde(default)]
    orders: Vec<Order>,
}

impl TryFrom<OrderTableRecord> for OrderTable {
    type Error = TableError;

    fn try_from(record: OrderTableRecord) -> TableResult<Self> {
        validate_guest_count(record.number_of_guests)?;
        Ok(Self {
            id: record.id,
            table_group_id: record.table_group_id,
            number_of_guests: record.number_of_guests,
            empty: record.empty,
            orders: record.orders,
        })
    }
}

impl OrderTable {
    /// New, unpersisted table with no group and no orders
    pub fn new(number_of_guests: i32, empty: bool) -> TableResult<Self> {
        validate_guest_count(number_of_guests)?;
        Ok(Self {
            id: None,
            table_group_id: None,
            number_of_guests,
            empty,
            orders: Vec::new(),
        })
    }

    /// Rebuild a persisted table
    pub fn restore(
        id: i64,
        table_group_id: Option<i64>,
        number_of_guests: i32,
        empty: bool,
        orders: Vec<Order>,
    ) -> TableResult<Self> {
        validate_guest_count(number_of_guests)?;
        Ok(Self {
            id: Some(id),
            table_group_id,
            number_of_guests,
            empty,
            orders,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn table_group_id(&self) -> Option<i64> {
        self.table_group_id
    }

    pub fn number_of_guests(&self) -> i32 {
        self.number_of_guests
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }

    pub fn has_active_order(&self) -> bool {
        self.orders.iter().any(Order::is_active)
    }

    /// Empty and not in any group
    pub fn is_groupable(&self) -> bool {
        self.empty && !self.is_grouped()
    }

    /// Identity assigned by the persistence collaborator
    pub fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Replace the orders seen by the activity check
    pub fn attach_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// Toggle the empty flag.
    ///
    /// Group membership is checked before order activity.
    pub fn change_empty(&mut self, empty: bool) -> TableResult<()> {
        self.validate_not_grouped()?;
        self.validate_no_active_order()?;
        self.empty = empty;
        Ok(())
    }

    /// Set the guest count.
    ///
    /// The sign is checked before emptiness.
    pub fn change_number_of_guests(&mut self, number_of_guests: i32) -> TableResult<()> {
        validate_guest_count(number_of_guests)?;
        self.validate_not_empty()?;
        self.number_of_guests = number_of_guests;
        Ok(())
    }

    pub(crate) fn assign_to_group(&mut self, table_group_id: i64) -> TableResult<()> {
        if !self.is_groupable() {
            return Err(TableError::NotEligibleForGrouping);
        }
        self.table_group_id = Some(table_group_id);
        self.empty = false;
        Ok(())
    }

    /// Does not re-check order activity.
    pub(crate) fn release_from_group(&mut self, release: ReleaseEmptiness) {
        self.table_group_id = None;
        if release == ReleaseEmptiness::Occupied {
            self.empty = false;
        }
    }

    fn validate_not_grouped(&self) -> TableResult<()> {
        match self.table_group_id {
            Some(group_id) => Err(TableError::TableInGroup(group_id)),
            None => Ok(()),
        }
    }

    fn validate_no_active_order(&self) -> TableResult<()> {
        if self.has_active_order() {
            return Err(TableError::ActiveOrderExists);
        }
        Ok(())
    }

    fn validate_not_empty(&self) -> TableResult<()> {
        if self.empty {
            return Err(TableError::TableEmpty);
        }
        Ok(())
    }
}

fn validate_guest_count(number_of_guests: i32) -> TableResult<()> {
    if number_of_guests < 0 {
        return Err(TableError::NegativeGuestCount(number_of_guests));
    }
    Ok(())
}
