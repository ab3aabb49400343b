//! Record contract checks
//!
//! Checked once when a dataset is loaded:
//! - employee and department numbers are unique
//! - salary is positive, commission (when present) is non-negative
//! - every department reference resolves
//! - every manager reference resolves to an employee
//! - every grade band has `low_salary <= high_salary`
//!
//! Grade bands are NOT required to be disjoint or contiguous.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::errors::{SourceError, SourceResult};
use crate::model::{Department, Employee, SalaryGrade};

/// Validates a dataset against the record contract.
///
/// Returns the first violation found.
pub fn validate_dataset(
    employees: &[Employee],
    departments: &[Department],
    grades: &[SalaryGrade],
) -> SourceResult<()> {
    let mut dept_nos = HashSet::new();
    for dept in departments {
        if !dept_nos.insert(dept.dept_no) {
            return Err(SourceError::contract(format!(
                "duplicate department number {}",
                dept.dept_no
            )));
        }
    }

    let mut emp_nos = HashSet::new();
    for emp in employees {
        if !emp_nos.insert(emp.emp_no) {
            return Err(SourceError::contract(format!(
                "duplicate employee number {}",
                emp.emp_no
            )));
        }
    }

    for emp in employees {
        validate_employee(emp, &emp_nos, &dept_nos)?;
    }

    for grade in grades {
        if grade.low_salary > grade.high_salary {
            return Err(SourceError::contract(format!(
                "grade {} has low bound {} above high bound {}",
                grade.grade, grade.low_salary, grade.high_salary
            )));
        }
    }

    Ok(())
}

fn validate_employee(
    emp: &Employee,
    emp_nos: &HashSet<i32>,
    dept_nos: &HashSet<i32>,
) -> SourceResult<()> {
    if emp.salary <= Decimal::ZERO {
        return Err(SourceError::contract(format!(
            "employee {} has non-positive salary {}",
            emp.emp_no, emp.salary
        )));
    }

    if let Some(comm) = emp.commission {
        if comm < Decimal::ZERO {
            return Err(SourceError::contract(format!(
                "employee {} has negative commission {}",
                emp.emp_no, comm
            )));
        }
    }

    if !dept_nos.contains(&emp.dept_no) {
        return Err(SourceError::contract(format!(
            "employee {} references unknown department {}",
            emp.emp_no, emp.dept_no
        )));
    }

    if let Some(mgr) = emp.manager {
        if !emp_nos.contains(&mgr) {
            return Err(SourceError::contract(format!(
                "employee {} references unknown manager {}",
                emp.emp_no, mgr
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn emp(emp_no: i32, salary: i64, dept_no: i32) -> Employee {
        Employee::new(
            emp_no,
            format!("E{}", emp_no),
            "CLERK",
            NaiveDate::from_ymd_opt(1981, 1, 1).unwrap(),
            Decimal::from(salary),
            dept_no,
        )
    }

    fn depts() -> Vec<Department> {
        vec![Department::new(10, "ACCOUNTING", "NEW YORK")]
    }

    fn assert_violation(result: SourceResult<()>, needle: &str) {
        match result {
            Err(SourceError::ContractViolation(msg)) => {
                assert!(msg.contains(needle), "unexpected message: {}", msg)
            }
            other => panic!("expected contract violation, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_dataset() {
        let grades = vec![SalaryGrade::new(1, Decimal::from(100), Decimal::from(900))];
        assert!(validate_dataset(&[emp(1, 800, 10)], &depts(), &grades).is_ok());
    }

    #[test]
    fn test_duplicate_employee() {
        let result = validate_dataset(&[emp(1, 800, 10), emp(1, 900, 10)], &depts(), &[]);
        assert_violation(result, "duplicate employee");
    }

    #[test]
    fn test_duplicate_department() {
        let mut departments = depts();
        departments.push(Department::new(10, "OTHER", "DALLAS"));
        assert_violation(validate_dataset(&[], &departments, &[]), "duplicate department");
    }

    #[test]
    fn test_non_positive_salary() {
        assert_violation(
            validate_dataset(&[emp(1, 0, 10)], &depts(), &[]),
            "non-positive salary",
        );
    }

    #[test]
    fn test_negative_commission() {
        let e = emp(1, 800, 10).with_commission(Decimal::from(-1));
        assert_violation(validate_dataset(&[e], &depts(), &[]), "negative commission");
    }

    #[test]
    fn test_orphan_department() {
        assert_violation(
            validate_dataset(&[emp(1, 800, 99)], &depts(), &[]),
            "unknown department",
        );
    }

    #[test]
    fn test_orphan_manager() {
        let e = emp(1, 800, 10).with_manager(42);
        assert_violation(validate_dataset(&[e], &depts(), &[]), "unknown manager");
    }

    #[test]
    fn test_inverted_grade() {
        let grades = vec![SalaryGrade::new(1, Decimal::from(900), Decimal::from(100))];
        assert_violation(validate_dataset(&[], &depts(), &grades), "above high bound");
    }

    #[test]
    fn test_overlapping_grades_allowed() {
        let grades = vec![
            SalaryGrade::new(1, Decimal::from(100), Decimal::from(900)),
            SalaryGrade::new(2, Decimal::from(500), Decimal::from(1500)),
        ];
        assert!(validate_dataset(&[emp(1, 800, 10)], &depts(), &grades).is_ok());
    }
}
