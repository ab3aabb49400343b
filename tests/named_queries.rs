//! Named Query Tests
//!
//! Each named query evaluated against the built-in fixture, asserting the
//! literal properties callers depend on.

use empquery::model::Employee;
use empquery::queries::{NamedQuery, Queries};
use empquery::source::{DataSource, FixtureSource};
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

fn queries() -> Queries {
    Queries::fixture()
}

fn fixture_employees() -> Vec<Employee> {
    FixtureSource::new().employees().unwrap()
}

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

// =============================================================================
// Scalar Reductions
// =============================================================================

#[test]
fn test_max_salary() {
    assert_eq!(queries().max_salary().unwrap(), d(5000));
}

#[test]
fn test_min_salary_in_dept_30() {
    assert_eq!(queries().min_salary_in_dept_30().unwrap(), d(1250));
}

// =============================================================================
// Ordered, Set-Shaped and Structural Queries
// =============================================================================

#[test]
fn test_first_two_hired() {
    let first = queries().first_two_hired().unwrap();
    assert_eq!(first.len(), 2);
    assert!(first[0].hire_date <= first[1].hire_date);

    let earliest = fixture_employees().iter().map(|e| e.hire_date).min().unwrap();
    assert_eq!(first[0].hire_date, earliest);
}

#[test]
fn test_distinct_jobs() {
    let jobs = queries().distinct_jobs().unwrap();
    assert!(jobs.contains(&"PRESIDENT".to_string()));
    assert!(jobs.contains(&"SALESMAN".to_string()));

    let mut deduped = jobs.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), jobs.len());
}

#[test]
fn test_employees_with_manager() {
    let with_mgr = queries().employees_with_manager().unwrap();
    assert!(with_mgr.iter().all(|e| e.manager.is_some()));
    assert_eq!(with_mgr.len(), fixture_employees().len() - 1);
}

#[test]
fn test_all_employees_earn_more_than_500() {
    let result = queries().employees_earning_over_500().unwrap();
    assert_eq!(result.len(), fixture_employees().len());
}

#[test]
fn test_commission_over_400() {
    let result = queries().employees_with_commission_over_400().unwrap();
    let expected = fixture_employees()
        .iter()
        .filter(|e| e.commission.is_some_and(|c| c > d(400)))
        .count();
    assert_eq!(result.len(), expected);
    assert!(result.iter().all(|e| e.commission.unwrap() > d(400)));
}

#[test]
fn test_salesmen() {
    let result = queries().salesmen().unwrap();
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|e| e.job == "SALESMAN"));
}

#[test]
fn test_dept_30_ordered_by_salary_desc() {
    let result = queries().dept_30_by_salary_desc().unwrap();
    assert_eq!(result.len(), 2);
    assert!(result[0].salary >= result[1].salary);
}

#[test]
fn test_employees_in_chicago() {
    let result = queries().employees_in_chicago().unwrap();
    assert!(!result.is_empty());
    assert!(result.iter().all(|e| e.dept_no == 30));
}

#[test]
fn test_names_and_salaries() {
    let result = queries().names_and_salaries().unwrap();
    assert_eq!(result.len(), fixture_employees().len());
    assert!(result
        .iter()
        .all(|r| !r.name.trim().is_empty() && r.salary > Decimal::ZERO));
}

#[test]
fn test_employees_with_commission() {
    let result = queries().employees_with_commission().unwrap();
    let names: Vec<_> = result.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ALLEN", "WARD"]);
}

// =============================================================================
// Multi-Entity Compositions
// =============================================================================

#[test]
fn test_employee_manager_pairs() {
    let result = queries().employee_manager_pairs().unwrap();
    assert!(result
        .iter()
        .any(|r| r.employee == "SMITH" && r.manager == "FORD"));
}

#[test]
fn test_total_income_includes_commission() {
    let result = queries().total_income().unwrap();
    assert!(result
        .iter()
        .any(|r| r.name == "ALLEN" && r.total_income == d(1900)));
    assert!(result
        .iter()
        .any(|r| r.name == "KING" && r.total_income == d(5000)));
}

#[test]
fn test_employee_department_grade() {
    let result = queries().employee_department_grades().unwrap();
    assert!(result
        .iter()
        .any(|r| r.name == "ALLEN" && r.department == "SALES" && r.grade == 3));
    assert_eq!(result.len(), fixture_employees().len());
}

#[test]
fn test_employee_department_names() {
    let result = queries().employee_department_names().unwrap();
    assert!(result
        .iter()
        .any(|r| r.department == "SALES" && r.name == "ALLEN"));
}

#[test]
fn test_headcount_per_department() {
    let result = queries().headcount_per_department().unwrap();
    assert!(result.iter().any(|g| g.dept_no == 30 && g.count == 2));
    let total: usize = result.iter().map(|g| g.count).sum();
    assert_eq!(total, fixture_employees().len());
}

#[test]
fn test_employee_grades() {
    let result = queries().employee_grades().unwrap();
    assert!(result.iter().any(|r| r.name == "ALLEN" && r.grade == 3));
}

#[test]
fn test_average_salary_per_department() {
    let result = queries().average_salary_per_department().unwrap();
    assert!(result
        .iter()
        .any(|r| r.dept_no == 30 && r.average_salary > d(1000)));

    let dept_20 = result.iter().find(|r| r.dept_no == 20).unwrap();
    assert_eq!(dept_20.average_salary.round_dp(2), Decimal::new(225833, 2));
}

#[test]
fn test_above_department_average() {
    let result = queries().employees_above_department_average().unwrap();
    assert!(result.contains(&"ALLEN".to_string()));
    assert!(!result.contains(&"KING".to_string()));
}

// =============================================================================
// Determinism
// =============================================================================

/// Repeated runs serialise to identical bytes.
#[test]
fn test_every_query_is_deterministic() {
    let queries = queries();
    for query in NamedQuery::ALL {
        let first = serde_json::to_vec(&queries.run(query).unwrap()).unwrap();
        for _ in 0..10 {
            let again = serde_json::to_vec(&queries.run(query).unwrap()).unwrap();
            assert_eq!(first, again, "{} not deterministic", query);
        }
    }
}

/// Running every query leaves a fresh load unchanged.
#[test]
fn test_queries_do_not_disturb_source() {
    let source = FixtureSource::new();
    let before = source.employees().unwrap();

    let queries = Queries::new(source);
    for query in NamedQuery::ALL {
        queries.run(query).unwrap();
    }

    assert_eq!(queries.source().employees().unwrap(), before);
}
