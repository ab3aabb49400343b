//! Built-in dataset
//!
//! Six employees across three departments, four departments and five
//! contiguous salary grades. Rebuilt on every call.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::errors::{SourceError, SourceResult};
use super::DataSource;
use crate::model::{Department, Employee, SalaryGrade};

/// The built-in fixture data source
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl FixtureSource {
    /// Creates the fixture source
    pub fn new() -> Self {
        Self
    }
}

fn date(year: i32, month: u32, day: u32) -> SourceResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SourceError::contract(format!("invalid hire date {}-{}-{}", year, month, day))
    })
}

fn money(value: i64) -> Decimal {
    Decimal::from(value)
}

impl DataSource for FixtureSource {
    fn employees(&self) -> SourceResult<Vec<Employee>> {
        Ok(vec![
            Employee::new(7369, "SMITH", "CLERK", date(1980, 12, 17)?, money(800), 20)
                .with_manager(7902),
            Employee::new(7499, "ALLEN", "SALESMAN", date(1981, 2, 20)?, money(1600), 30)
                .with_manager(7839)
                .with_commission(money(300)),
            Employee::new(7521, "WARD", "SALESMAN", date(1981, 2, 22)?, money(1250), 30)
                .with_manager(7839)
                .with_commission(money(500)),
            Employee::new(7566, "JONES", "MANAGER", date(1981, 4, 2)?, money(2975), 20)
                .with_manager(7839),
            Employee::new(7839, "KING", "PRESIDENT", date(1981, 11, 17)?, money(5000), 10),
            Employee::new(7902, "FORD", "ANALYST", date(1981, 12, 3)?, money(3000), 20)
                .with_manager(7566),
        ])
    }

    fn departments(&self) -> SourceResult<Vec<Department>> {
        Ok(vec![
            Department::new(10, "ACCOUNTING", "NEW YORK"),
            Department::new(20, "RESEARCH", "DALLAS"),
            Department::new(30, "SALES", "CHICAGO"),
            Department::new(40, "OPERATIONS", "BOSTON"),
        ])
    }

    fn salary_grades(&self) -> SourceResult<Vec<SalaryGrade>> {
        Ok(vec![
            SalaryGrade::new(1, money(700), money(1200)),
            SalaryGrade::new(2, money(1201), money(1400)),
            SalaryGrade::new(3, money(1401), money(2000)),
            SalaryGrade::new(4, money(2001), money(3000)),
            SalaryGrade::new(5, money(3001), money(9999)),
        ])
    }
}
