//! Record types for empquery
//!
//! Three immutable value records make up a dataset:
//! - `Employee`: many-to-one to `Department`, optional self-reference to a manager
//! - `Department`: identified by `dept_no`
//! - `SalaryGrade`: inclusive `[low_salary, high_salary]` band
//!
//! Nothing here is mutated after load. Every query result is built from
//! fresh values.

mod types;

pub use types::{Department, Employee, SalaryGrade};
