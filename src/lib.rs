//! empquery - a deterministic in-memory relational query layer
//!
//! Answers fixed questions over three small record sets (employees,
//! departments, salary grades) with filters, projections, stable sorts,
//! distinct, equi- and range-joins, grouped aggregates and a correlated
//! above-group-average filter.
//!
//! ```ignore
//! use empquery::queries::Queries;
//!
//! let queries = Queries::fixture();
//! assert_eq!(queries.max_salary()?, rust_decimal::Decimal::from(5000));
//! ```

pub mod cli;
pub mod model;
pub mod observability;
pub mod operators;
pub mod queries;
pub mod source;
