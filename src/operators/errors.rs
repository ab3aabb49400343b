//! Operator error types
//!
//! Error codes:
//! - EMPQ_EMPTY_INPUT (ERROR)
//! - EMPQ_ARITHMETIC_OVERFLOW (ERROR)

use std::fmt;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query failed, caller may continue
    Error,
    /// Input cannot be trusted, caller must stop
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Operator error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorErrorCode {
    /// Min, max or average requested over no values
    EmptyInput,
    /// A decimal sum left the representable range
    ArithmeticOverflow,
}

impl OperatorErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            OperatorErrorCode::EmptyInput => "EMPQ_EMPTY_INPUT",
            OperatorErrorCode::ArithmeticOverflow => "EMPQ_ARITHMETIC_OVERFLOW",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            OperatorErrorCode::EmptyInput | OperatorErrorCode::ArithmeticOverflow => {
                Severity::Error
            }
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            OperatorErrorCode::EmptyInput => "over empty input",
            OperatorErrorCode::ArithmeticOverflow => "overflowed",
        }
    }
}

impl fmt::Display for OperatorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Operator error with the failing operation named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorError {
    code: OperatorErrorCode,
    operation: &'static str,
}

impl OperatorError {
    /// Create an empty input error for the named operation
    pub fn empty_input(operation: &'static str) -> Self {
        Self {
            code: OperatorErrorCode::EmptyInput,
            operation,
        }
    }

    /// Create an overflow error for the named operation
    pub fn overflow(operation: &'static str) -> Self {
        Self {
            code: OperatorErrorCode::ArithmeticOverflow,
            operation,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> OperatorErrorCode {
        self.code
    }

    /// Returns the operation that failed
    pub fn operation(&self) -> &'static str {
        self.operation
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

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} {}",
            self.code.severity(),
            self.code.code(),
            self.operation,
            self.code.detail()
        )
    }
}

impl std::error::Error for OperatorError {}

/// Result type for operators
pub type OperatorResult<T> = Result<T, OperatorError>;
