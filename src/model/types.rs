//! Employee, department and salary grade records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single employee row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee number
    pub emp_no: i32,
    /// Employee name
    pub name: String,
    /// Job title
    pub job: String,
    /// Employee number of the manager, absent for the top of the hierarchy
    #[serde(default)]
    pub manager: Option<i32>,
    /// Date of hire
    pub hire_date: NaiveDate,
    /// Monthly salary, always positive
    pub salary: Decimal,
    /// Commission, absent when the employee earns none
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// Department the employee belongs to
    pub dept_no: i32,
}

impl Employee {
    /// Creates an employee with no manager and no commission
    pub fn new(
        emp_no: i32,
        name: impl Into<String>,
        job: impl Into<String>,
        hire_date: NaiveDate,
        salary: Decimal,
        dept_no: i32,
    ) -> Self {
        Self {
            emp_no,
            name: name.into(),
            job: job.into(),
            manager: None,
            hire_date,
            salary,
            commission: None,
            dept_no,
        }
    }

    /// Sets the manager reference
    pub fn with_manager(mut self, manager: i32) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Sets the commission
    pub fn with_commission(mut self, commission: Decimal) -> Self {
        self.commission = Some(commission);
        self
    }

    /// Returns true if a manager is recorded
    pub fn has_manager(&self) -> bool {
        self.manager.is_some()
    }

    /// Returns true if a commission is recorded, including a zero commission
    pub fn has_commission(&self) -> bool {
        self.commission.is_some()
    }

    /// Salary plus commission.
    ///
    /// This is the one place an absent commission counts as zero.
    /// Returns `None` when the sum leaves the decimal range.
    pub fn total_income(&self) -> Option<Decimal> {
        self.salary
            .checked_add(self.commission.unwrap_or(Decimal::ZERO))
    }
}

/// A department row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department number
    pub dept_no: i32,
    /// Department name
    pub name: String,
    /// Location
    pub location: String,
}

impl Department {
    /// Creates a department
    pub fn new(dept_no: i32, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            dept_no,
            name: name.into(),
            location: location.into(),
        }
    }
}

/// A salary grade band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryGrade {
    /// Grade number
    pub grade: i32,
    /// Lowest salary in the band (inclusive)
    pub low_salary: Decimal,
    /// Highest salary in the band (inclusive)
    pub high_salary: Decimal,
}

impl SalaryGrade {
    /// Creates a salary grade
    pub fn new(grade: i32, low_salary: Decimal, high_salary: Decimal) -> Self {
        Self {
            grade,
            low_salary,
            high_salary,
        }
    }

    /// Returns true if `salary` falls inside the inclusive band
    pub fn contains(&self, salary: Decimal) -> bool {
        self.low_salary <= salary && salary <= self.high_salary
    }
}
