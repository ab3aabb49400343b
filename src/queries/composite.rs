//! Named queries that combine several collections or groups
//!
//! Equi-joins (department, manager self-join), range-joins against salary
//! grades, grouped aggregates and the above-department-average filter.

use super::rows::{
    DepartmentAverage, DepartmentHeadcount, EmployeeDepartment, EmployeeDepartmentGrade,
    EmployeeGrade, EmployeeManager,
};
use super::{QueryResult, Queries};
use crate::operators::{Aggregate, CorrelatedFilter, EquiJoin, GroupBy, Projection, RangeJoin};
use crate::source::DataSource;

impl<S: DataSource> Queries<S> {
    /// Employee and manager names via a self-join on the manager reference.
    ///
    /// Employees without a manager do not appear.
    pub fn employee_manager_pairs(&self) -> QueryResult<Vec<EmployeeManager>> {
        let employees = self.source.employees()?;
        let pairs = EquiJoin::inner(&employees, &employees, |e| e.manager, |m| Some(m.emp_no));
        Ok(Projection::map(&pairs, |(e, m)| EmployeeManager {
            employee: e.name.clone(),
            manager: m.name.clone(),
        }))
    }

    /// Employee, department name and every salary grade containing the salary
    pub fn employee_department_grades(&self) -> QueryResult<Vec<EmployeeDepartmentGrade>> {
        let employees = self.source.employees()?;
        let departments = self.source.departments()?;
        let grades = self.source.salary_grades()?;

        let staffed = EquiJoin::inner(
            &employees,
            &departments,
            |e| Some(e.dept_no),
            |d| Some(d.dept_no),
        );
        let graded = RangeJoin::inclusive(
            &staffed,
            &grades,
            |(e, _)| e.salary,
            |g| (g.low_salary, g.high_salary),
        );

        Ok(Projection::map(&graded, |((e, d), g)| EmployeeDepartmentGrade {
            name: e.name.clone(),
            department: d.name.clone(),
            grade: g.grade,
        }))
    }

    /// Employee name with department name
    pub fn employee_department_names(&self) -> QueryResult<Vec<EmployeeDepartment>> {
        let employees = self.source.employees()?;
        let departments = self.source.departments()?;
        let pairs = EquiJoin::inner(
            &employees,
            &departments,
            |e| Some(e.dept_no),
            |d| Some(d.dept_no),
        );
        Ok(Projection::map(&pairs, |(e, d)| EmployeeDepartment {
            name: e.name.clone(),
            department: d.name.clone(),
        }))
    }

    /// Employee count per department, first-occurrence order
    pub fn headcount_per_department(&self) -> QueryResult<Vec<DepartmentHeadcount>> {
        let employees = self.source.employees()?;
        Ok(GroupBy::count(&employees, |e| e.dept_no)
            .into_iter()
            .map(|g| DepartmentHeadcount {
                dept_no: g.key,
                count: g.value,
            })
            .collect())
    }

    /// Employee name with every salary grade containing the salary
    pub fn employee_grades(&self) -> QueryResult<Vec<EmployeeGrade>> {
        let employees = self.source.employees()?;
        let grades = self.source.salary_grades()?;
        let pairs = RangeJoin::inclusive(
            &employees,
            &grades,
            |e| e.salary,
            |g| (g.low_salary, g.high_salary),
        );
        Ok(Projection::map(&pairs, |(e, g)| EmployeeGrade {
            name: e.name.clone(),
            grade: g.grade,
        }))
    }

    /// Average salary per department, first-occurrence order
    pub fn average_salary_per_department(&self) -> QueryResult<Vec<DepartmentAverage>> {
        let employees = self.source.employees()?;
        let averages = GroupBy::aggregate(&employees, |e| e.dept_no, |e| e.salary, Aggregate::Avg)?;
        Ok(averages
            .into_iter()
            .map(|g| DepartmentAverage {
                dept_no: g.key,
                average_salary: g.value,
            })
            .collect())
    }

    /// Names of employees paid strictly more than their department's average
    pub fn employees_above_department_average(&self) -> QueryResult<Vec<String>> {
        let employees = self.source.employees()?;
        let above =
            CorrelatedFilter::above_group_average(&employees, |e| e.dept_no, |e| e.salary)?;
        Ok(Projection::map(&above, |e| e.name.clone()))
    }
}
