//! Data sources for empquery
//!
//! A data source hands out the three record collections. Every accessor
//! returns a fresh, independent copy so callers never share mutable state.
//!
//! Implementations:
//! - `FixtureSource`: the built-in dataset
//! - `JsonDataSource`: a dataset document read from disk or a string and
//!   validated once at load

mod errors;
mod fixture;
mod loader;
mod validator;

pub use errors::{SourceError, SourceResult};
pub use fixture::FixtureSource;
pub use loader::{Dataset, JsonDataSource};
pub use validator::validate_dataset;

use crate::model::{Department, Employee, SalaryGrade};

/// Supplies the employee, department and salary grade collections
pub trait DataSource {
    /// All employees, in source order
    fn employees(&self) -> SourceResult<Vec<Employee>>;

    /// All departments, in source order
    fn departments(&self) -> SourceResult<Vec<Department>>;

    /// All salary grades, in source order
    fn salary_grades(&self) -> SourceResult<Vec<SalaryGrade>>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn employees(&self) -> SourceResult<Vec<Employee>> {
        (**self).employees()
    }

    fn departments(&self) -> SourceResult<Vec<Department>> {
        (**self).departments()
    }

    fn salary_grades(&self) -> SourceResult<Vec<SalaryGrade>> {
        (**self).salary_grades()
    }
}
