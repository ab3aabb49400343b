//! Grouping and aggregation over decimal values
//!
//! Groups are emitted in first-occurrence order of their key.
//! `Avg`, `Min` and `Max` over no values fail with `EMPQ_EMPTY_INPUT`;
//! `Count` and `Sum` of nothing are zero. A sum that leaves the decimal
//! range fails with `EMPQ_ARITHMETIC_OVERFLOW`.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use rust_decimal::Decimal;

use super::errors::{OperatorError, OperatorResult};

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregate {
    /// Returns the function name
    pub fn name(&self) -> &'static str {
        match self {
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
            Aggregate::Avg => "avg",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
        }
    }

    /// Applies the aggregate to a list of values.
    ///
    /// Averages are exact decimal division of the sum by the count.
    pub fn apply(&self, values: &[Decimal]) -> OperatorResult<Decimal> {
        match self {
            Aggregate::Count => Ok(Decimal::from(values.len())),
            Aggregate::Sum => checked_sum(values, self.name()),
            Aggregate::Avg => {
                if values.is_empty() {
                    return Err(OperatorError::empty_input(self.name()));
                }
                let sum = checked_sum(values, self.name())?;
                Ok(sum / Decimal::from(values.len()))
            }
            Aggregate::Min => values
                .iter()
                .copied()
                .min()
                .ok_or_else(|| OperatorError::empty_input(self.name())),
            Aggregate::Max => values
                .iter()
                .copied()
                .max()
                .ok_or_else(|| OperatorError::empty_input(self.name())),
        }
    }
}

fn checked_sum(values: &[Decimal], operation: &'static str) -> OperatorResult<Decimal> {
    values.iter().try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(*v)
            .ok_or_else(|| OperatorError::overflow(operation))
    })
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One partition of a grouped input
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a, K, T> {
    /// Shared key of every member
    pub key: K,
    /// Members in input order
    pub members: Vec<&'a T>,
}

/// One output row of a grouped aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupValue<K, V> {
    pub key: K,
    pub value: V,
}

/// Partitions records by key
pub struct GroupBy;

impl GroupBy {
    /// Partitions `items` by `key`, groups ordered by first occurrence
    pub fn partition<'a, T, K, F>(items: &'a [T], key: F) -> Vec<Group<'a, K, T>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<Group<'a, K, T>> = Vec::new();

        for item in items {
            let k = key(item);
            match slots.get(&k) {
                Some(&slot) => groups[slot].members.push(item),
                None => {
                    slots.insert(k.clone(), groups.len());
                    groups.push(Group {
                        key: k,
                        members: vec![item],
                    });
                }
            }
        }

        groups
    }

    /// Number of records per key
    pub fn count<T, K, F>(items: &[T], key: F) -> Vec<GroupValue<K, usize>>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        Self::partition(items, key)
            .into_iter()
            .map(|g| GroupValue {
                value: g.members.len(),
                key: g.key,
            })
            .collect()
    }

    /// Applies `aggregate` to the decimal `value` of each group's members
    pub fn aggregate<T, K, FK, FV>(
        items: &[T],
        key: FK,
        value: FV,
        aggregate: Aggregate,
    ) -> OperatorResult<Vec<GroupValue<K, Decimal>>>
    where
        K: Eq + Hash + Clone,
        FK: Fn(&T) -> K,
        FV: Fn(&T) -> Decimal,
    {
        Self::partition(items, key)
            .into_iter()
            .map(|g| -> OperatorResult<GroupValue<K, Decimal>> {
                let values: Vec<Decimal> = g.members.iter().map(|m| value(*m)).collect();
                Ok(GroupValue {
                    value: aggregate.apply(&values)?,
                    key: g.key,
                })
            })
            .collect()
    }
}
