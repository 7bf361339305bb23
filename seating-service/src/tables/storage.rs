//! In-memory seating registry
//!
//! Tables, groups and orders are kept in maps keyed by identity. All
//! writes go through [`WriteTxn`], which holds the registry write lock for
//! its whole lifetime and stages changes in an overlay. Nothing reaches the
//! registry until [`WriteTxn::commit`]; dropping the transaction discards
//! the overlay.
//!
//! # Layout
//!
//! | Map | Key | Value |
//! |-----|-----|-------|
//! | `tables` | table id | `OrderTable` without orders |
//! | `groups` | group id | `TableGroup` |
//! | `orders` | table id | order id → `Order` |
//! | `processed_commands` | command id | - |

use parking_lot::{RwLock, RwLockWriteGuard};
use shared::table::{Order, OrderTable, TableGroup};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Identity space exhausted for {0}")]
    IdSpaceExhausted(&'static str),

    #[error("Table not found: {0}")]
    TableNotFound(i64),
}

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Default)]
struct Registry {
    tables: BTreeMap<i64, OrderTable>,
    groups: BTreeMap<i64, TableGroup>,
    orders: BTreeMap<i64, BTreeMap<i64, Order>>,
    processed_commands: HashSet<String>,
    last_table_id: i64,
    last_group_id: i64,
    last_order_id: i64,
    sequence: u64,
}

impl Registry {
    fn orders_for(&self, table_id: i64) -> Vec<Order> {
        self.orders
            .get(&table_id)
            .map(|orders| orders.values().cloned().collect())
            .unwrap_or_default()
    }

    fn hydrate(&self, table: &OrderTable) -> OrderTable {
        let mut table = table.clone();
        if let Some(id) = table.id() {
            table.attach_orders(self.orders_for(id));
        }
        table
    }
}

fn next_id(last: i64, what: &'static str) -> StorageResult<i64> {
    last.checked_add(1)
        .ok_or(StorageError::IdSpaceExhausted(what))
}

/// Seating storage
#[derive(Debug, Default)]
pub struct SeatingStorage {
    registry: RwLock<Registry>,
}

impl SeatingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a write transaction.
    ///
    /// Blocks until every other transaction has finished; readers are
    /// blocked while it is open.
    pub fn begin_write(&self) -> WriteTxn<'_> {
        let registry = self.registry.write();
        WriteTxn {
            last_table_id: registry.last_table_id,
            last_group_id: registry.last_group_id,
            sequence: registry.sequence,
            registry,
            tables: BTreeMap::new(),
            groups: BTreeMap::new(),
            command_id: None,
        }
    }

    /// Find a table with its orders attached
    pub fn find_table(&self, table_id: i64) -> Option<OrderTable> {
        let registry = self.registry.read();
        registry.tables.get(&table_id).map(|t| registry.hydrate(t))
    }

    pub fn list_tables(&self) -> Vec<OrderTable> {
        let registry = self.registry.read();
        registry.tables.values().map(|t| registry.hydrate(t)).collect()
    }

    pub fn find_group(&self, group_id: i64) -> Option<TableGroup> {
        self.registry.read().groups.get(&group_id).cloned()
    }

    pub fn list_groups(&self) -> Vec<TableGroup> {
        self.registry.read().groups.values().cloned().collect()
    }

    pub fn is_command_processed(&self, command_id: &str) -> bool {
        self.registry.read().processed_commands.contains(command_id)
    }

    pub fn current_sequence(&self) -> u64 {
        self.registry.read().sequence
    }

    /// Insert or replace an order placed against an existing table.
    ///
    /// Order status is owned by the ordering collaborator; this is how it
    /// makes the status visible to table resolution. An order without an
    /// identity is assigned one.
    pub fn record_order(&self, mut order: Order) -> StorageResult<Order> {
        let mut registry = self.registry.write();
        let table_id = order.order_table_id();
        if !registry.tables.contains_key(&table_id) {
            return Err(StorageError::TableNotFound(table_id));
        }

        let order_id = match order.id() {
            Some(id) => id,
            None => {
                let id = next_id(registry.last_order_id, "order")?;
                order.assign_id(id);
                id
            }
        };
        registry.last_order_id = registry.last_order_id.max(order_id);

        // an order never moves between tables
        for (other_table, orders) in registry.orders.iter_mut() {
            if *other_table != table_id {
                orders.remove(&order_id);
            }
        }
        registry
            .orders
            .entry(table_id)
            .or_default()
            .insert(order_id, order.clone());

        tracing::debug!(order_id, table_id, status = ?order.status(), "Order recorded");
        Ok(order)
    }
}

/// Write transaction over the registry
pub struct WriteTxn<'a> {
    registry: RwLockWriteGuard<'a, Registry>,
    tables: BTreeMap<i64, OrderTable>,
    /// `None` marks a removed group
    groups: BTreeMap<i64, Option<TableGroup>>,
    last_table_id: i64,
    last_group_id: i64,
    sequence: u64,
    command_id: Option<String>,
}

impl WriteTxn<'_> {
    /// Staged or committed table, with orders attached
    pub fn table(&self, table_id: i64) -> Option<OrderTable> {
        self.tables
            .get(&table_id)
            .or_else(|| self.registry.tables.get(&table_id))
            .map(|t| self.registry.hydrate(t))
    }

    pub fn group(&self, group_id: i64) -> Option<TableGroup> {
        match self.groups.get(&group_id) {
            Some(staged) => staged.clone(),
            None => self.registry.groups.get(&group_id).cloned(),
        }
    }

    /// Stage a table, assigning an identity if it has none. Returns the id.
    pub fn put_table(&mut self, mut table: OrderTable) -> StorageResult<i64> {
        let table_id = match table.id() {
            Some(id) => {
                self.last_table_id = self.last_table_id.max(id);
                id
            }
            None => {
                let id = next_id(self.last_table_id, "table")?;
                self.last_table_id = id;
                table.assign_id(id);
                id
            }
        };
        // orders live in their own map
        table.attach_orders(Vec::new());
        self.tables.insert(table_id, table);
        Ok(table_id)
    }

    pub fn allocate_group_id(&mut self) -> StorageResult<i64> {
        let id = next_id(self.last_group_id, "table group")?;
        self.last_group_id = id;
        Ok(id)
    }

    pub fn put_group(&mut self, group: TableGroup) {
        self.last_group_id = self.last_group_id.max(group.id());
        self.groups.insert(group.id(), Some(group));
    }

    pub fn remove_group(&mut self, group_id: i64) {
        self.groups.insert(group_id, None);
    }

    pub fn next_sequence(&mut self) -> u64 {
        self.sequence += 1;
        self.sequence
    }

    pub fn is_command_processed(&self, command_id: &str) -> bool {
        self.registry.processed_commands.contains(command_id)
            || self.command_id.as_deref() == Some(command_id)
    }

    pub fn mark_command_processed(&mut self, command_id: &str) {
        self.command_id = Some(command_id.to_string());
    }

    /// Apply every staged change
    pub fn commit(self) {
        let WriteTxn {
            mut registry,
            tables,
            groups,
            last_table_id,
            last_group_id,
            sequence,
            command_id,
        } = self;

        registry.tables.extend(tables);
        for (group_id, group) in groups {
            match group {
                Some(group) => {
                    registry.groups.insert(group_id, group);
                }
                None => {
                    registry.groups.remove(&group_id);
                }
            }
        }
        registry.last_table_id = last_table_id;
        registry.last_group_id = last_group_id;
        registry.sequence = sequence;
        if let Some(command_id) = command_id {
            registry.processed_commands.insert(command_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::table::OrderStatus;

    fn seed_table(storage: &SeatingStorage, guests: i32, empty: bool) -> i64 {
        let mut txn = storage.begin_write();
        let id = txn
            .put_table(OrderTable::new(guests, empty).unwrap())
            .unwrap();
        txn.commit();
        id
    }

    #[test]
    fn test_put_table_assigns_sequential_ids() {
        let storage = SeatingStorage::new();
        assert_eq!(seed_table(&storage, 0, true), 1);
        assert_eq!(seed_table(&storage, 2, false), 2);
        assert_eq!(storage.list_tables().len(), 2);
        assert_eq!(storage.find_table(2).unwrap().number_of_guests(), 2);
    }

    #[test]
    fn test_uncommitted_changes_are_discarded() {
        let storage = SeatingStorage::new();
        {
            let mut txn = storage.begin_write();
            txn.put_table(OrderTable::new(0, true).unwrap()).unwrap();
            let group_id = txn.allocate_group_id().unwrap();
            txn.put_group(TableGroup::restore(group_id, 0, vec![1, 2]));
            txn.next_sequence();
            txn.mark_command_processed("cmd-1");
        }
        assert!(storage.list_tables().is_empty());
        assert!(storage.list_groups().is_empty());
        assert_eq!(storage.current_sequence(), 0);
        assert!(!storage.is_command_processed("cmd-1"));

        // ids are not consumed by a dropped transaction
        assert_eq!(seed_table(&storage, 0, true), 1);
    }

    #[test]
    fn test_txn_reads_its_own_writes() {
        let storage = SeatingStorage::new();
        let table_id = seed_table(&storage, 0, true);

        let mut txn = storage.begin_write();
        let mut table = txn.table(table_id).unwrap();
        table.change_empty(false).unwrap();
        txn.put_table(table).unwrap();
        assert!(!txn.table(table_id).unwrap().is_empty());

        let group = TableGroup::restore(9, 0, vec![table_id]);
        txn.put_group(group);
        assert!(txn.group(9).is_some());
        txn.remove_group(9);
        assert!(txn.group(9).is_none());
        txn.commit();

        assert!(!storage.find_table(table_id).unwrap().is_empty());
        assert!(storage.find_group(9).is_none());
    }

    #[test]
    fn test_restored_id_is_never_reissued() {
        let storage = SeatingStorage::new();
        let mut txn = storage.begin_write();
        txn.put_table(OrderTable::restore(5, None, 2, false, vec![]).unwrap())
            .unwrap();
        txn.commit();

        assert_eq!(seed_table(&storage, 0, true), 6);
        assert_eq!(storage.find_table(5).unwrap().number_of_guests(), 2);
        assert_eq!(storage.list_tables().len(), 2);

        let mut txn = storage.begin_write();
        txn.put_group(TableGroup::restore(9, 0, vec![5, 6]));
        assert_eq!(txn.allocate_group_id().unwrap(), 10);
    }

    #[test]
    fn test_record_order_attaches_to_table() {
        let storage = SeatingStorage::new();
        let table_id = seed_table(&storage, 2, false);

        let order = storage
            .record_order(Order::new(table_id, OrderStatus::Cooking))
            .unwrap();
        assert_eq!(order.id(), Some(1));
        assert!(storage.find_table(table_id).unwrap().has_active_order());

        storage
            .record_order(Order::restore(1, table_id, OrderStatus::Completion))
            .unwrap();
        let table = storage.find_table(table_id).unwrap();
        assert_eq!(table.orders().len(), 1);
        assert!(!table.has_active_order());
    }

    #[test]
    fn test_record_order_for_unknown_table() {
        let storage = SeatingStorage::new();
        let err = storage
            .record_order(Order::new(5, OrderStatus::Meal))
            .unwrap_err();
        assert!(matches!(err, StorageError::TableNotFound(5)));
    }

    #[test]
    fn test_stored_tables_do_not_duplicate_orders() {
        let storage = SeatingStorage::new();
        let table_id = seed_table(&storage, 2, false);
        storage
            .record_order(Order::new(table_id, OrderStatus::Meal))
            .unwrap();

        let mut txn = storage.begin_write();
        let table = txn.table(table_id).unwrap();
        assert_eq!(table.orders().len(), 1);
        txn.put_table(table).unwrap();
        txn.commit();

        assert_eq!(storage.find_table(table_id).unwrap().orders().len(), 1);
    }
}
