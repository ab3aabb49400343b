//! CLI-specific error types

use std::fmt;
use std::io;

use crate::queries::QueryError;
use crate::source::SourceError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Invalid command line option
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// No named query with that name
    UnknownQuery,
    /// Dataset could not be loaded or broke the record contract
    DataSourceError,
    /// One or more queries failed
    QueryFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "EMPQ_CLI_CONFIG_ERROR",
            Self::IoError => "EMPQ_CLI_IO_ERROR",
            Self::UnknownQuery => "EMPQ_CLI_UNKNOWN_QUERY",
            Self::DataSourceError => "EMPQ_CLI_DATA_SOURCE_ERROR",
            Self::QueryFailed => "EMPQ_CLI_QUERY_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Unknown query name
    pub fn unknown_query(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::UnknownQuery, msg)
    }

    /// Query failure
    pub fn query_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::QueryFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        Self::new(CliErrorCode::DataSourceError, e.to_string())
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        Self::query_failed(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::unknown_query("unknown query 'x'");
        assert_eq!(err.to_string(), "EMPQ_CLI_UNKNOWN_QUERY: unknown query 'x'");
    }

    #[test]
    fn test_from_source_error() {
        let err: CliError = SourceError::contract("duplicate employee number 1").into();
        assert_eq!(err.code(), &CliErrorCode::DataSourceError);
        assert!(err.message().contains("duplicate employee"));
    }
}
