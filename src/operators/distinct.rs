//! First-seen deduplication

use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicate keys while keeping first-seen order
pub struct Distinct;

impl Distinct {
    /// Returns the distinct projected keys in first-seen order
    pub fn values<T, K, F>(items: &[T], key: F) -> Vec<K>
    where
        K: Eq + Hash + Clone,
        F: Fn(&T) -> K,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for item in items {
            let k = key(item);
            if seen.insert(k.clone()) {
                out.push(k);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_first_seen_order() {
        let jobs = vec!["CLERK", "SALESMAN", "CLERK", "MANAGER", "SALESMAN"];
        assert_eq!(
            Distinct::values(&jobs, |j| j.to_string()),
            vec!["CLERK", "SALESMAN", "MANAGER"]
        );
    }

    #[test]
    fn test_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(Distinct::values(&empty, |v| *v).is_empty());
    }
}
