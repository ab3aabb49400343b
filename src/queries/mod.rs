//! Named queries for empquery
//!
//! Each named query is a fixed pipeline of operators. Every call re-fetches
//! the collections from the data source, never touches the fetched data in
//! place, and returns freshly built values.
//!
//! # Shapes
//!
//! 1. Scalar reduction: `max_salary`, `min_salary_in_dept_30`
//! 2. Ordered top-N: `first_two_hired`
//! 3. Set-shape: `distinct_jobs`
//! 4. Structural filter: `employees_with_manager`, `salesmen`, ...
//! 5. Multi-entity composition: joins, grouping and the correlated
//!    above-average filter
//!
//! `Queries::run` evaluates any `NamedQuery` into a `QueryOutput`.

mod catalog;
mod composite;
mod errors;
mod rows;
mod single;

pub use catalog::{NamedQuery, QueryOutput};
pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use rows::{
    DepartmentAverage, DepartmentHeadcount, EmployeeCommission, EmployeeDepartment,
    EmployeeDepartmentGrade, EmployeeGrade, EmployeeIncome, EmployeeManager, NameSalary,
};

use crate::source::{DataSource, FixtureSource};

const SALES_DEPT_NO: i32 = 30;
const SALESMAN: &str = "SALESMAN";
const CHICAGO: &str = "CHICAGO";

/// The named queries, bound to a data source
#[derive(Debug, Clone, Default)]
pub struct Queries<S = FixtureSource> {
    source: S,
}

impl Queries<FixtureSource> {
    /// Queries over the built-in fixture
    pub fn fixture() -> Self {
        Self::new(FixtureSource::new())
    }
}

impl<S: DataSource> Queries<S> {
    /// Binds the queries to a data source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Evaluates a named query
    pub fn run(&self, query: NamedQuery) -> QueryResult<QueryOutput> {
        let output = match query {
            NamedQuery::MaxSalary => QueryOutput::Scalar(self.max_salary()?),
            NamedQuery::MinSalaryDept30 => QueryOutput::Scalar(self.min_salary_in_dept_30()?),
            NamedQuery::FirstTwoHired => QueryOutput::Employees(self.first_two_hired()?),
            NamedQuery::DistinctJobs => QueryOutput::Names(self.distinct_jobs()?),
            NamedQuery::EmployeesWithManager => {
                QueryOutput::Employees(self.employees_with_manager()?)
            }
            NamedQuery::SalaryOver500 => QueryOutput::Employees(self.employees_earning_over_500()?),
            NamedQuery::CommissionOver400 => {
                QueryOutput::Employees(self.employees_with_commission_over_400()?)
            }
            NamedQuery::EmployeeManagerPairs => {
                QueryOutput::EmployeeManagers(self.employee_manager_pairs()?)
            }
            NamedQuery::TotalIncome => QueryOutput::Incomes(self.total_income()?),
            NamedQuery::EmployeeDepartmentGrade => {
                QueryOutput::EmployeeDepartmentGrades(self.employee_department_grades()?)
            }
            NamedQuery::Salesmen => QueryOutput::Employees(self.salesmen()?),
            NamedQuery::Dept30BySalaryDesc => {
                QueryOutput::Employees(self.dept_30_by_salary_desc()?)
            }
            NamedQuery::EmployeesInChicago => QueryOutput::Employees(self.employees_in_chicago()?),
            NamedQuery::NamesAndSalaries => QueryOutput::NameSalaries(self.names_and_salaries()?),
            NamedQuery::EmployeeDepartmentNames => {
                QueryOutput::EmployeeDepartments(self.employee_department_names()?)
            }
            NamedQuery::HeadcountPerDepartment => {
                QueryOutput::Headcounts(self.headcount_per_department()?)
            }
            NamedQuery::EmployeesWithCommission => {
                QueryOutput::Commissions(self.employees_with_commission()?)
            }
            NamedQuery::EmployeeGrades => QueryOutput::EmployeeGrades(self.employee_grades()?),
            NamedQuery::AverageSalaryPerDepartment => {
                QueryOutput::DepartmentAverages(self.average_salary_per_department()?)
            }
            NamedQuery::AboveDepartmentAverage => {
                QueryOutput::Names(self.employees_above_department_average()?)
            }
        };
        Ok(output)
    }
}
