//! Stable sorting by an extracted key

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest key first
    Asc,
    /// Largest key first
    Desc,
}

/// Sorts records by a key
pub struct Sorter;

impl Sorter {
    /// Returns a sorted copy of `items`.
    ///
    /// The sort is stable in both directions: records with equal keys keep
    /// their input order, also when sorting descending.
    pub fn sort_by_key<T, K, F>(items: &[T], key: F, direction: SortDirection) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = key(a).cmp(&key(b));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        sorted
    }

    /// Keeps at most the first `n` records
    pub fn take<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
        items.truncate(n);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: &'static str,
        age: u32,
    }

    fn row(id: &'static str, age: u32) -> Row {
        Row { id, age }
    }

    fn ids(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let rows = vec![row("c", 30), row("a", 20), row("b", 25)];
        let sorted = Sorter::sort_by_key(&rows, |r| r.age, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_descending() {
        let rows = vec![row("c", 30), row("a", 20), row("b", 25)];
        let sorted = Sorter::sort_by_key(&rows, |r| r.age, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_stable_ascending() {
        let rows = vec![row("x", 25), row("a", 20), row("y", 25), row("z", 25)];
        let sorted = Sorter::sort_by_key(&rows, |r| r.age, SortDirection::Asc);
        assert_eq!(ids(&sorted), vec!["a", "x", "y", "z"]);
    }

    #[test]
    fn test_sort_stable_descending() {
        let rows = vec![row("x", 25), row("a", 30), row("y", 25)];
        let sorted = Sorter::sort_by_key(&rows, |r| r.age, SortDirection::Desc);
        assert_eq!(ids(&sorted), vec!["a", "x", "y"]);
    }

    #[test]
    fn test_sort_leaves_input_alone() {
        let rows = vec![row("b", 2), row("a", 1)];
        let _ = Sorter::sort_by_key(&rows, |r| r.age, SortDirection::Asc);
        assert_eq!(ids(&rows), vec!["b", "a"]);
    }

    #[test]
    fn test_take() {
        assert_eq!(Sorter::take(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(Sorter::take(vec![1], 2), vec![1]);
    }
}
