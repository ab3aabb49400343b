//! Catalog of named queries and their output envelope

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use super::rows::{
    DepartmentAverage, DepartmentHeadcount, EmployeeCommission, EmployeeDepartment,
    EmployeeDepartmentGrade, EmployeeGrade, EmployeeIncome, EmployeeManager, NameSalary,
};
use crate::model::Employee;

/// Every named query, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedQuery {
    MaxSalary,
    MinSalaryDept30,
    FirstTwoHired,
    DistinctJobs,
    EmployeesWithManager,
    SalaryOver500,
    CommissionOver400,
    EmployeeManagerPairs,
    TotalIncome,
    EmployeeDepartmentGrade,
    Salesmen,
    Dept30BySalaryDesc,
    EmployeesInChicago,
    NamesAndSalaries,
    EmployeeDepartmentNames,
    HeadcountPerDepartment,
    EmployeesWithCommission,
    EmployeeGrades,
    AverageSalaryPerDepartment,
    AboveDepartmentAverage,
}

impl NamedQuery {
    /// All queries in catalog order
    pub const ALL: [NamedQuery; 20] = [
        NamedQuery::MaxSalary,
        NamedQuery::MinSalaryDept30,
        NamedQuery::FirstTwoHired,
        NamedQuery::DistinctJobs,
        NamedQuery::EmployeesWithManager,
        NamedQuery::SalaryOver500,
        NamedQuery::CommissionOver400,
        NamedQuery::EmployeeManagerPairs,
        NamedQuery::TotalIncome,
        NamedQuery::EmployeeDepartmentGrade,
        NamedQuery::Salesmen,
        NamedQuery::Dept30BySalaryDesc,
        NamedQuery::EmployeesInChicago,
        NamedQuery::NamesAndSalaries,
        NamedQuery::EmployeeDepartmentNames,
        NamedQuery::HeadcountPerDepartment,
        NamedQuery::EmployeesWithCommission,
        NamedQuery::EmployeeGrades,
        NamedQuery::AverageSalaryPerDepartment,
        NamedQuery::AboveDepartmentAverage,
    ];

    /// Kebab-case name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            NamedQuery::MaxSalary => "max-salary",
            NamedQuery::MinSalaryDept30 => "min-salary-dept-30",
            NamedQuery::FirstTwoHired => "first-two-hired",
            NamedQuery::DistinctJobs => "distinct-jobs",
            NamedQuery::EmployeesWithManager => "employees-with-manager",
            NamedQuery::SalaryOver500 => "salary-over-500",
            NamedQuery::CommissionOver400 => "commission-over-400",
            NamedQuery::EmployeeManagerPairs => "employee-manager-pairs",
            NamedQuery::TotalIncome => "total-income",
            NamedQuery::EmployeeDepartmentGrade => "employee-department-grade",
            NamedQuery::Salesmen => "salesmen",
            NamedQuery::Dept30BySalaryDesc => "dept-30-by-salary-desc",
            NamedQuery::EmployeesInChicago => "employees-in-chicago",
            NamedQuery::NamesAndSalaries => "names-and-salaries",
            NamedQuery::EmployeeDepartmentNames => "employee-department-names",
            NamedQuery::HeadcountPerDepartment => "headcount-per-department",
            NamedQuery::EmployeesWithCommission => "employees-with-commission",
            NamedQuery::EmployeeGrades => "employee-grades",
            NamedQuery::AverageSalaryPerDepartment => "average-salary-per-department",
            NamedQuery::AboveDepartmentAverage => "above-department-average",
        }
    }

    /// One-line description of the question the query answers
    pub fn description(&self) -> &'static str {
        match self {
            NamedQuery::MaxSalary => "Highest salary across all employees",
            NamedQuery::MinSalaryDept30 => "Lowest salary in department 30",
            NamedQuery::FirstTwoHired => "The two earliest hires",
            NamedQuery::DistinctJobs => "Distinct job titles in first-seen order",
            NamedQuery::EmployeesWithManager => "Employees that report to a manager",
            NamedQuery::SalaryOver500 => "Employees earning more than 500",
            NamedQuery::CommissionOver400 => "Employees with a commission above 400",
            NamedQuery::EmployeeManagerPairs => "Each employee with the manager's name",
            NamedQuery::TotalIncome => "Salary plus commission per employee",
            NamedQuery::EmployeeDepartmentGrade => {
                "Each employee with department name and salary grade"
            }
            NamedQuery::Salesmen => "Employees whose job is SALESMAN",
            NamedQuery::Dept30BySalaryDesc => "Department 30 employees by salary, highest first",
            NamedQuery::EmployeesInChicago => "Employees of departments located in CHICAGO",
            NamedQuery::NamesAndSalaries => "Name and salary of every employee",
            NamedQuery::EmployeeDepartmentNames => "Each employee with department name",
            NamedQuery::HeadcountPerDepartment => "Number of employees per department",
            NamedQuery::EmployeesWithCommission => "Employees that have a commission",
            NamedQuery::EmployeeGrades => "Each employee with salary grade",
            NamedQuery::AverageSalaryPerDepartment => "Average salary per department",
            NamedQuery::AboveDepartmentAverage => {
                "Employees earning more than their department's average"
            }
        }
    }
}

impl fmt::Display for NamedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NamedQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedQuery::ALL
            .iter()
            .copied()
            .find(|q| q.name() == s)
            .ok_or_else(|| format!("unknown query '{}'", s))
    }
}

/// Result of running any named query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryOutput {
    Scalar(Decimal),
    Employees(Vec<Employee>),
    Names(Vec<String>),
    EmployeeManagers(Vec<EmployeeManager>),
    Incomes(Vec<EmployeeIncome>),
    EmployeeDepartmentGrades(Vec<EmployeeDepartmentGrade>),
    NameSalaries(Vec<NameSalary>),
    EmployeeDepartments(Vec<EmployeeDepartment>),
    Headcounts(Vec<DepartmentHeadcount>),
    Commissions(Vec<EmployeeCommission>),
    EmployeeGrades(Vec<EmployeeGrade>),
    DepartmentAverages(Vec<DepartmentAverage>),
}

impl QueryOutput {
    /// Number of rows; a scalar counts as one
    pub fn row_count(&self) -> usize {
        match self {
            QueryOutput::Scalar(_) => 1,
            QueryOutput::Employees(rows) => rows.len(),
            QueryOutput::Names(rows) => rows.len(),
            QueryOutput::EmployeeManagers(rows) => rows.len(),
            QueryOutput::Incomes(rows) => rows.len(),
            QueryOutput::EmployeeDepartmentGrades(rows) => rows.len(),
            QueryOutput::NameSalaries(rows) => rows.len(),
            QueryOutput::EmployeeDepartments(rows) => rows.len(),
            QueryOutput::Headcounts(rows) => rows.len(),
            QueryOutput::Commissions(rows) => rows.len(),
            QueryOutput::EmployeeGrades(rows) => rows.len(),
            QueryOutput::DepartmentAverages(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_and_parse_back() {
        let names: HashSet<_> = NamedQuery::ALL.iter().map(|q| q.name()).collect();
        assert_eq!(names.len(), NamedQuery::ALL.len());

        for query in NamedQuery::ALL {
            assert_eq!(query.name().parse::<NamedQuery>().unwrap(), query);
        }
    }

    #[test]
    fn test_unknown_name() {
        assert!("drop-tables".parse::<NamedQuery>().is_err());
    }

    #[test]
    fn test_output_json_shape() {
        let output = QueryOutput::Names(vec!["ALLEN".to_string()]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["kind"], "names");
        assert_eq!(value["value"][0], "ALLEN");
        assert_eq!(output.row_count(), 1);
    }
}
