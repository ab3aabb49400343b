//! Named queries over the employee collection alone
//!
//! Scalar reductions, ordered top-N, set-shaped and structural filters.

use rust_decimal::Decimal;

use super::rows::{EmployeeCommission, EmployeeIncome, NameSalary};
use super::{QueryError, QueryResult, Queries, CHICAGO, SALESMAN, SALES_DEPT_NO};
use crate::model::Employee;
use crate::operators::{
    Aggregate, Distinct, EquiJoin, Filter, Projection, SortDirection, Sorter,
};
use crate::source::DataSource;

const SALARY_FLOOR: i64 = 500;
const COMMISSION_FLOOR: i64 = 400;

impl<S: DataSource> Queries<S> {
    /// Highest salary across all employees
    pub fn max_salary(&self) -> QueryResult<Decimal> {
        let employees = self.source.employees()?;
        let salaries = Projection::map(&employees, |e| e.salary);
        Ok(Aggregate::Max.apply(&salaries)?)
    }

    /// Lowest salary in department 30
    pub fn min_salary_in_dept_30(&self) -> QueryResult<Decimal> {
        let employees = self.source.employees()?;
        let in_dept = Filter::apply(&employees, |e| e.dept_no == SALES_DEPT_NO);
        let salaries = Projection::map(&in_dept, |e| e.salary);
        Ok(Aggregate::Min.apply(&salaries)?)
    }

    /// The two earliest hires; equal hire dates keep source order
    pub fn first_two_hired(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        let by_hire = Sorter::sort_by_key(&employees, |e| e.hire_date, SortDirection::Asc);
        Ok(Sorter::take(by_hire, 2))
    }

    /// Distinct job titles in first-seen order
    pub fn distinct_jobs(&self) -> QueryResult<Vec<String>> {
        let employees = self.source.employees()?;
        Ok(Distinct::values(&employees, |e| e.job.clone()))
    }

    /// Employees with a manager reference
    pub fn employees_with_manager(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        Ok(Filter::apply(&employees, Employee::has_manager))
    }

    /// Employees earning more than 500
    pub fn employees_earning_over_500(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        let floor = Decimal::from(SALARY_FLOOR);
        Ok(Filter::apply(&employees, |e| e.salary > floor))
    }

    /// Employees whose commission is present and above 400
    pub fn employees_with_commission_over_400(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        let floor = Decimal::from(COMMISSION_FLOOR);
        Ok(Filter::apply(&employees, |e| {
            e.commission.is_some_and(|c| c > floor)
        }))
    }

    /// Salary plus commission for every employee; no commission adds zero
    pub fn total_income(&self) -> QueryResult<Vec<EmployeeIncome>> {
        let employees = self.source.employees()?;
        Projection::map(&employees, |e| -> QueryResult<EmployeeIncome> {
            let total_income = e
                .total_income()
                .ok_or_else(|| QueryError::overflow(format!("total income of {}", e.name)))?;
            Ok(EmployeeIncome {
                name: e.name.clone(),
                total_income,
            })
        })
        .into_iter()
        .collect()
    }

    /// Employees whose job is SALESMAN
    pub fn salesmen(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        Ok(Filter::apply(&employees, |e| e.job == SALESMAN))
    }

    /// Department 30 employees, highest salary first
    pub fn dept_30_by_salary_desc(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        let in_dept = Filter::apply(&employees, |e| e.dept_no == SALES_DEPT_NO);
        Ok(Sorter::sort_by_key(&in_dept, |e| e.salary, SortDirection::Desc))
    }

    /// Employees of any department located in CHICAGO
    pub fn employees_in_chicago(&self) -> QueryResult<Vec<Employee>> {
        let employees = self.source.employees()?;
        let departments = self.source.departments()?;
        let chicago = Filter::apply(&departments, |d| d.location == CHICAGO);
        Ok(EquiJoin::semi(
            &employees,
            &chicago,
            |e| Some(e.dept_no),
            |d| Some(d.dept_no),
        ))
    }

    /// Name and salary of every employee
    pub fn names_and_salaries(&self) -> QueryResult<Vec<NameSalary>> {
        let employees = self.source.employees()?;
        Ok(Projection::map(&employees, |e| NameSalary {
            name: e.name.clone(),
            salary: e.salary,
        }))
    }

    /// Employees that have a commission, zero included
    pub fn employees_with_commission(&self) -> QueryResult<Vec<EmployeeCommission>> {
        let employees = self.source.employees()?;
        let with_commission = Filter::apply(&employees, Employee::has_commission);
        Ok(Projection::map(&with_commission, |e| EmployeeCommission {
            name: e.name.clone(),
            commission: e.commission.unwrap_or(Decimal::ZERO),
        }))
    }
}
