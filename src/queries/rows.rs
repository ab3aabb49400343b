//! Named result rows
//!
//! Multi-field query results bind by field name, never by position.

use rust_decimal::Decimal;
use serde::Serialize;

/// Employee name paired with the manager's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeManager {
    pub employee: String,
    pub manager: String,
}

/// Salary plus commission for one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeIncome {
    pub name: String,
    pub total_income: Decimal,
}

/// Employee, department name and salary grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDepartmentGrade {
    pub name: String,
    pub department: String,
    pub grade: i32,
}

/// Employee name with department name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDepartment {
    pub name: String,
    pub department: String,
}

/// Employee name with salary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameSalary {
    pub name: String,
    pub salary: Decimal,
}

/// Number of employees in one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentHeadcount {
    pub dept_no: i32,
    pub count: usize,
}

/// Employee name with a commission that is known to be present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeCommission {
    pub name: String,
    pub commission: Decimal,
}

/// Employee name with salary grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeGrade {
    pub name: String,
    pub grade: i32,
}

/// Average salary of one department
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAverage {
    pub dept_no: i32,
    pub average_salary: Decimal,
}
