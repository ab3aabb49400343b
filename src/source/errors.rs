//! Data source errors
//!
//! The data source is a trusted local fixture. Anything it hands back that
//! breaks the record contract is fatal and never retried.

use thiserror::Error;

/// Result type for data source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Data source errors
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Dataset unreadable at {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Malformed dataset JSON: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Creates a contract violation error
    pub fn contract(reason: impl Into<String>) -> Self {
        SourceError::ContractViolation(reason.into())
    }

    /// Every data source failure is fatal
    pub fn is_fatal(&self) -> bool {
        true
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Malformed(e.to_string())
    }
}
