//! Filter and projection over record slices
//!
//! Both leave the input untouched and return a new `Vec` in input order.

/// Keeps the records that satisfy a predicate
pub struct Filter;

impl Filter {
    /// Returns clones of the matching records, preserving relative order
    pub fn apply<T, P>(items: &[T], predicate: P) -> Vec<T>
    where
        T: Clone,
        P: Fn(&T) -> bool,
    {
        items.iter().filter(|item| predicate(*item)).cloned().collect()
    }
}

/// Maps every record to a new value
pub struct Projection;

impl Projection {
    /// Projects each record, one output per input, in input order
    pub fn map<T, U, F>(items: &[T], project: F) -> Vec<U>
    where
        F: Fn(&T) -> U,
    {
        items.iter().map(project).collect()
    }
}
