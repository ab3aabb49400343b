//! Correlated average filter
//!
//! Keeps a record only when its value is strictly greater than the average
//! of the group it belongs to. The group averages are computed once into a
//! `GroupAverages` lookup and then applied per record.
//!
//! A record in a group of one equals its own average and is never kept.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;

use super::aggregate::{Aggregate, GroupBy};
use super::errors::OperatorResult;

/// Precomputed average per group key
#[derive(Debug, Clone)]
pub struct GroupAverages<K> {
    averages: HashMap<K, Decimal>,
}

impl<K: Eq + Hash + Clone> GroupAverages<K> {
    /// Computes the average of `value` for every group of `items`
    pub fn build<T, FK, FV>(items: &[T], key: FK, value: FV) -> OperatorResult<Self>
    where
        FK: Fn(&T) -> K,
        FV: Fn(&T) -> Decimal,
    {
        let averages = GroupBy::aggregate(items, key, value, Aggregate::Avg)?
            .into_iter()
            .map(|gv| (gv.key, gv.value))
            .collect();
        Ok(Self { averages })
    }

    /// Average of the group with this key, if the group exists
    pub fn average_for(&self, key: &K) -> Option<Decimal> {
        self.averages.get(key).copied()
    }
}

/// Filters records against an aggregate of their own group
pub struct CorrelatedFilter;

impl CorrelatedFilter {
    /// Keeps records whose `value` exceeds their group's average, in input order
    pub fn above_group_average<T, K, FK, FV>(
        items: &[T],
        key: FK,
        value: FV,
    ) -> OperatorResult<Vec<T>>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        FK: Fn(&T) -> K,
        FV: Fn(&T) -> Decimal,
    {
        let averages = GroupAverages::build(items, &key, &value)?;

        Ok(items
            .iter()
            .filter(|item| match averages.average_for(&key(*item)) {
                Some(avg) => value(*item) > avg,
                None => false,
            })
            .cloned()
            .collect())
    }
}
