//! Table group (tables combined for a shared bill)

use super::error::{TableError, TableResult};
use super::order_table::OrderTable;
use super::policy::{SeatingPolicy, UngroupPolicy};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum number of distinct tables in a group
pub const MIN_GROUP_SIZE: usize = 2;

/// Group of two or more tables.
///
/// Owns the membership relation only. Members are fixed at creation;
/// dissolution releases all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableGroupRecord")]
pub struct TableGroup {
    id: i64,
    created_at: Timestamp,
    /// Member table ids in request order
    order_table_ids: Vec<i64>,
}

/// Wire form of [`TableGroup`]; only reaches the entity through validation
#[derive(Debug, Deserialize)]
struct TableGroupRecord {
    id: i64,
    created_at: Timestamp,
    order_table_ids: Vec<i64>,
}

impl TryFrom<TableGroupRecord> for TableGroup {
    type Error = TableError;

    fn try_from(record: TableGroupRecord) -> TableResult<Self> {
        if record.order_table_ids.len() < MIN_GROUP_SIZE {
            return Err(TableError::InsufficientTables(record.order_table_ids.len()));
        }
        let mut seen = HashSet::with_capacity(record.order_table_ids.len());
        if let Some(&table_id) = record.order_table_ids.iter().find(|&&id| !seen.insert(id)) {
            return Err(TableError::DuplicateTable(table_id));
        }
        Ok(Self::restore(record.id, record.created_at, record.order_table_ids))
    }
}

impl TableGroup {
    /// Form a group from already-resolved candidate tables.
    ///
    /// Every candidate is checked before any of them is touched, so a
    /// failure leaves all candidates unchanged. On success each member
    /// references `id` and is no longer empty.
    pub fn create(
        id: i64,
        candidates: &mut [OrderTable],
        created_at: Timestamp,
    ) -> TableResult<Self> {
        if candidates.len() < MIN_GROUP_SIZE {
            return Err(TableError::InsufficientTables(candidates.len()));
        }

        let mut order_table_ids = Vec::with_capacity(candidates.len());
        let mut seen = HashSet::with_capacity(candidates.len());
        for table in candidates.iter() {
            let table_id = table.id().ok_or(TableError::TableNotPersisted)?;
            if !seen.insert(table_id) {
                return Err(TableError::DuplicateTable(table_id));
            }
            order_table_ids.push(table_id);
        }

        if let Some((_, &table_id)) = candidates
            .iter()
            .zip(&order_table_ids)
            .find(|(table, _)| !table.is_groupable())
        {
            return Err(TableError::TableNotGroupable(table_id));
        }

        for table in candidates.iter_mut() {
            table.assign_to_group(id)?;
        }

        Ok(Self {
            id,
            created_at,
            order_table_ids,
        })
    }

    /// Rebuild a persisted group
    pub fn restore(id: i64, created_at: Timestamp, order_table_ids: Vec<i64>) -> Self {
        Self {
            id,
            created_at,
            order_table_ids,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn order_table_ids(&self) -> &[i64] {
        &self.order_table_ids
    }

    pub fn contains(&self, table_id: i64) -> bool {
        self.order_table_ids.contains(&table_id)
    }

    /// Dissolve the group, releasing every member.
    ///
    /// `members` must be exactly the group's tables. The group is consumed;
    /// afterwards no member refers to it.
    pub fn ungroup(self, members: &mut [OrderTable], policy: &SeatingPolicy) -> TableResult<()> {
        self.validate_members(members)?;

        if policy.ungroup == UngroupPolicy::BlockActiveOrders
            && members.iter().any(OrderTable::has_active_order)
        {
            return Err(TableError::GroupHasActiveOrders(self.id));
        }

        for table in members.iter_mut() {
            table.release_from_group(policy.release);
        }
        Ok(())
    }

    fn validate_members(&self, members: &[OrderTable]) -> TableResult<()> {
        let belongs = |t: &OrderTable| {
            t.table_group_id() == Some(self.id) && t.id().is_some_and(|id| self.contains(id))
        };
        if members.len() != self.order_table_ids.len() || !members.iter().all(belongs) {
            return Err(TableError::MembersMismatch(self.id));
        }
        Ok(())
    }
}
