//! JSON dataset loader
//!
//! A dataset document carries all three collections:
//!
//! ```json
//! {"employees": [...], "departments": [...], "salary_grades": [...]}
//! ```
//!
//! The document is parsed and validated once. Accessors clone from the
//! loaded copy, so every call sees the same logical data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{SourceError, SourceResult};
use super::validator::validate_dataset;
use super::DataSource;
use crate::model::{Department, Employee, SalaryGrade};
use crate::observability::Logger;

/// The three collections of one dataset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
    pub salary_grades: Vec<SalaryGrade>,
}

impl Dataset {
    /// Snapshots any data source into a dataset
    pub fn capture<S: DataSource>(source: &S) -> SourceResult<Self> {
        Ok(Self {
            employees: source.employees()?,
            departments: source.departments()?,
            salary_grades: source.salary_grades()?,
        })
    }

    /// Checks the record contract
    pub fn validate(&self) -> SourceResult<()> {
        validate_dataset(&self.employees, &self.departments, &self.salary_grades)
    }
}

/// Data source backed by a validated dataset document
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    dataset: Dataset,
}

impl JsonDataSource {
    /// Loads and validates a dataset file.
    ///
    /// An unreadable file, malformed JSON or a contract violation are all fatal.
    pub fn load(path: &Path) -> SourceResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SourceError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let source = Self::from_json_str(&content)?;

        let employees = source.dataset.employees.len().to_string();
        let departments = source.dataset.departments.len().to_string();
        let grades = source.dataset.salary_grades.len().to_string();
        let path = path.display().to_string();
        Logger::info(
            "DATASET_LOADED",
            &[
                ("departments", departments.as_str()),
                ("employees", employees.as_str()),
                ("path", path.as_str()),
                ("salary_grades", grades.as_str()),
            ],
        );

        Ok(source)
    }

    /// Parses and validates a dataset document
    pub fn from_json_str(content: &str) -> SourceResult<Self> {
        let dataset: Dataset = serde_json::from_str(content)?;
        Self::from_dataset(dataset)
    }

    /// Wraps an in-memory dataset after validating it
    pub fn from_dataset(dataset: Dataset) -> SourceResult<Self> {
        dataset.validate()?;
        Ok(Self { dataset })
    }

    /// Returns the loaded dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl DataSource for JsonDataSource {
    fn employees(&self) -> SourceResult<Vec<Employee>> {
        Ok(self.dataset.employees.clone())
    }

    fn departments(&self) -> SourceResult<Vec<Department>> {
        Ok(self.dataset.departments.clone())
    }

    fn salary_grades(&self) -> SourceResult<Vec<SalaryGrade>> {
        Ok(self.dataset.salary_grades.clone())
    }
}
