//! Observability for empquery
//!
//! - Structured logging (one JSON object per line, on stderr)
//! - Lifecycle scopes around units of work
//!
//! Observability is read-only: it never changes what a query returns.
//!
//! ```ignore
//! use empquery::observability::{Logger, ObservationScope};
//!
//! Logger::info("DATASET_LOADED", &[("employees", "6")]);
//!
//! let scope = ObservationScope::new("QUERY");
//! // ... do work ...
//! scope.complete();
//! ```

mod logger;
mod scope;

pub use logger::{Logger, Severity};
pub use scope::ObservationScope;
