//! Data Source Contract Tests
//!
//! Datasets written to disk and loaded through `JsonDataSource`:
//! - a valid dataset loads and answers queries like the fixture
//! - broken records fail as fatal contract violations
//! - every accessor call hands out an independent copy

use std::fs;
use std::path::Path;

use empquery::queries::{NamedQuery, Queries, QueryErrorCode};
use empquery::source::{DataSource, Dataset, FixtureSource, JsonDataSource, SourceError};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture_document() -> Value {
    let dataset = Dataset::capture(&FixtureSource::new()).unwrap();
    serde_json::to_value(&dataset).unwrap()
}

fn write_dataset(dir: &Path, doc: &Value) -> std::path::PathBuf {
    let path = dir.join("dataset.json");
    fs::write(&path, doc.to_string()).unwrap();
    path
}

fn load_err(doc: &Value) -> SourceError {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), doc);
    JsonDataSource::load(&path).unwrap_err()
}

// =============================================================================
// Loading
// =============================================================================

/// A dataset written from the fixture answers every query identically.
#[test]
fn test_loaded_fixture_matches_builtin() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &fixture_document());

    let loaded = Queries::new(JsonDataSource::load(&path).unwrap());
    let builtin = Queries::fixture();

    for query in NamedQuery::ALL {
        assert_eq!(
            loaded.run(query).unwrap(),
            builtin.run(query).unwrap(),
            "{} differs",
            query
        );
    }
}

/// Numeric money values are accepted as well as strings.
#[test]
fn test_numeric_money_accepted() {
    let mut doc = fixture_document();
    doc["employees"][0]["salary"] = json!(800);

    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &doc);
    let source = JsonDataSource::load(&path).unwrap();
    assert_eq!(source.employees().unwrap()[0].salary, Decimal::from(800));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = JsonDataSource::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SourceError::Unreadable { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dataset.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonDataSource::load(&path).unwrap_err();
    assert!(matches!(err, SourceError::Malformed(_)));
}

// =============================================================================
// Contract Violations
// =============================================================================

#[test]
fn test_orphan_department_rejected() {
    let mut doc = fixture_document();
    doc["employees"][1]["dept_no"] = json!(50);
    assert!(matches!(load_err(&doc), SourceError::ContractViolation(_)));
}

#[test]
fn test_negative_salary_rejected() {
    let mut doc = fixture_document();
    doc["employees"][2]["salary"] = json!("-1");
    assert!(matches!(load_err(&doc), SourceError::ContractViolation(_)));
}

#[test]
fn test_duplicate_employee_rejected() {
    let mut doc = fixture_document();
    let first = doc["employees"][0].clone();
    doc["employees"].as_array_mut().unwrap().push(first);
    assert!(matches!(load_err(&doc), SourceError::ContractViolation(_)));
}

/// A contract violation surfacing through a query is fatal.
#[test]
fn test_violation_maps_to_fatal_query_error() {
    let err: empquery::queries::QueryError = SourceError::contract("bad").into();
    assert_eq!(err.code(), QueryErrorCode::ContractViolation);
    assert!(err.is_fatal());
}

// =============================================================================
// Fresh Copies
// =============================================================================

#[test]
fn test_accessors_return_independent_copies() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &fixture_document());
    let source = JsonDataSource::load(&path).unwrap();

    let mut first = source.departments().unwrap();
    first.clear();

    assert_eq!(source.departments().unwrap().len(), 4);
}
