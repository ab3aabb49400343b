//! CLI argument definitions using clap
//!
//! Commands:
//! - empquery list
//! - empquery run <query>
//! - empquery run-all
//! - empquery check

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// empquery - named relational queries over employee records
#[derive(Parser, Debug)]
#[command(name = "empquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// JSON dataset to query instead of the built-in fixture
    #[arg(long, global = true, env = "EMPQUERY_DATA")]
    pub data: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Lowest log severity written to stderr (trace, info, warn, error, fatal)
    #[arg(long, global = true, env = "EMPQUERY_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the named queries
    List,

    /// Run one named query and print its result
    Run {
        /// Query name, as printed by `list`
        query: String,
    },

    /// Run every named query in catalog order
    RunAll,

    /// Validate the dataset and print record counts
    Check,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
