//! CLI module for empquery
//!
//! Provides command-line interface for:
//! - list: print the named query catalog
//! - run: evaluate one named query
//! - run-all: evaluate the whole catalog
//! - check: validate the dataset

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, GlobalOptions};
pub use commands::{check, list, open_source, run, run_all, run_command, run_query};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, write_json};
