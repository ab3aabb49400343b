//! Equi-join and range-join
//!
//! Both are inner joins: a left record with no partner produces no row.
//! Output order is left input order, then right input order within one
//! left record.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Joins records whose extracted keys are equal
pub struct EquiJoin;

impl EquiJoin {
    /// Inner equi-join.
    ///
    /// A `None` key on either side never matches, so nullable references
    /// (an employee without a manager) simply drop out. Both sides may be
    /// the same slice for a self-join.
    ///
    /// The right side is hashed once and probed per left record.
    pub fn inner<'a, L, R, K, FL, FR>(
        left: &'a [L],
        right: &'a [R],
        left_key: FL,
        right_key: FR,
    ) -> Vec<(&'a L, &'a R)>
    where
        K: Eq + Hash,
        FL: Fn(&L) -> Option<K>,
        FR: Fn(&R) -> Option<K>,
    {
        let mut build: HashMap<K, Vec<&'a R>> = HashMap::new();
        for r in right {
            if let Some(k) = right_key(r) {
                build.entry(k).or_default().push(r);
            }
        }

        let mut pairs = Vec::new();
        for l in left {
            let Some(k) = left_key(l) else {
                continue;
            };
            if let Some(matches) = build.get(&k) {
                pairs.extend(matches.iter().map(|r| (l, *r)));
            }
        }
        pairs
    }

    /// Left semi-join: the left records with at least one partner, each once,
    /// in left order
    pub fn semi<L, R, K, FL, FR>(left: &[L], right: &[R], left_key: FL, right_key: FR) -> Vec<L>
    where
        L: Clone,
        K: Eq + Hash,
        FL: Fn(&L) -> Option<K>,
        FR: Fn(&R) -> Option<K>,
    {
        let keys: HashSet<K> = right.iter().filter_map(|r| right_key(r)).collect();
        left.iter()
            .filter(|l| left_key(*l).is_some_and(|k| keys.contains(&k)))
            .cloned()
            .collect()
    }
}

/// Joins a value on the left against inclusive `[low, high]` bands on the right
pub struct RangeJoin;

impl RangeJoin {
    /// Inner range-join.
    ///
    /// Every band containing the left value yields a pair, so overlapping
    /// bands produce several rows and a value outside every band produces none.
    pub fn inclusive<'a, L, R, V, FV, FB>(
        left: &'a [L],
        right: &'a [R],
        value: FV,
        bounds: FB,
    ) -> Vec<(&'a L, &'a R)>
    where
        V: PartialOrd,
        FV: Fn(&L) -> V,
        FB: Fn(&R) -> (V, V),
    {
        let mut pairs = Vec::new();
        for l in left {
            let v = value(l);
            for r in right {
                let (low, high) = bounds(r);
                if low <= v && v <= high {
                    pairs.push((l, r));
                }
            }
        }
        pairs
    }
}
