//! Query operators for empquery
//!
//! Composable, pure transformations over record slices. No operator mutates
//! its input; every result is a new `Vec`.
//!
//! | Operator | Type |
//! |---|---|
//! | filter / project | `Filter`, `Projection` |
//! | stable sort, take | `Sorter` |
//! | first-seen distinct | `Distinct` |
//! | inner equi-join (incl. self-join) | `EquiJoin` |
//! | inclusive range-join | `RangeJoin` |
//! | group + aggregate | `GroupBy`, `Aggregate` |
//! | value above own group's average | `CorrelatedFilter`, `GroupAverages` |
//!
//! # Determinism
//!
//! Outputs follow input order wherever the operator does not reorder by
//! definition: filters keep relative order, sorts are stable, groups appear
//! in first-occurrence order, joins emit left order then right order.

mod aggregate;
mod correlated;
mod distinct;
mod errors;
mod filter;
mod join;
mod sorter;

pub use aggregate::{Aggregate, Group, GroupBy, GroupValue};
pub use correlated::{CorrelatedFilter, GroupAverages};
pub use distinct::Distinct;
pub use errors::{OperatorError, OperatorErrorCode, OperatorResult, Severity};
pub use filter::{Filter, Projection};
pub use join::{EquiJoin, RangeJoin};
pub use sorter::{SortDirection, Sorter};
