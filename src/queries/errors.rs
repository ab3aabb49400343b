//! Query error types
//!
//! Error codes:
//! - EMPQ_EMPTY_INPUT (ERROR)
//! - EMPQ_ARITHMETIC_OVERFLOW (ERROR)
//! - EMPQ_CONTRACT_VIOLATION (FATAL)

use std::fmt;

use crate::operators::{OperatorError, OperatorErrorCode, Severity};
use crate::source::SourceError;

/// Query error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// An aggregate that needs values received none
    EmptyInput,
    /// A money sum left the decimal range
    ArithmeticOverflow,
    /// The data source broke the record contract
    ContractViolation,
}

impl QueryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::EmptyInput => "EMPQ_EMPTY_INPUT",
            QueryErrorCode::ArithmeticOverflow => "EMPQ_ARITHMETIC_OVERFLOW",
            QueryErrorCode::ContractViolation => "EMPQ_CONTRACT_VIOLATION",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            QueryErrorCode::EmptyInput | QueryErrorCode::ArithmeticOverflow => Severity::Error,
            QueryErrorCode::ContractViolation => Severity::Fatal,
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error raised while evaluating a named query
#[derive(Debug, Clone)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
}

impl QueryError {
    /// Create an empty input error
    pub fn empty_input(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::EmptyInput,
            message: reason.into(),
        }
    }

    /// Create an arithmetic overflow error
    pub fn overflow(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::ArithmeticOverflow,
            message: reason.into(),
        }
    }

    /// Create a contract violation error (FATAL)
    pub fn contract_violation(reason: impl Into<String>) -> Self {
        Self {
            code: QueryErrorCode::ContractViolation,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for QueryError {}

impl From<OperatorError> for QueryError {
    fn from(e: OperatorError) -> Self {
        match e.code() {
            OperatorErrorCode::EmptyInput => {
                Self::empty_input(format!("{} over empty input", e.operation()))
            }
            OperatorErrorCode::ArithmeticOverflow => {
                Self::overflow(format!("{} overflowed", e.operation()))
            }
        }
    }
}

impl From<SourceError> for QueryError {
    fn from(e: SourceError) -> Self {
        Self::contract_violation(e.to_string())
    }
}

/// Result type for named queries
pub type QueryResult<T> = Result<T, QueryError>;
