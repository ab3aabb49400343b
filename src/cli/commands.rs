//! CLI command implementations
//!
//! Every command resolves its data source first: the JSON dataset named by
//! `--data`, otherwise the built-in fixture. Results go to stdout, logs to
//! stderr.

use serde_json::json;

use crate::observability::{Logger, ObservationScope, Severity};
use crate::queries::{NamedQuery, Queries};
use crate::source::{DataSource, Dataset, FixtureSource, JsonDataSource};

use super::args::{Cli, Command, GlobalOptions};
use super::errors::{CliError, CliResult};
use super::io::{error_envelope, ok_envelope, write_json};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli.options, cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(options: &GlobalOptions, cmd: Command) -> CliResult<()> {
    let severity: Severity = options
        .log_level
        .parse()
        .map_err(|e: String| CliError::config_error(e))?;
    Logger::set_min_severity(severity);

    match cmd {
        Command::List => list(options),
        Command::Run { query } => {
            let source = open_source(options)?;
            run_query(source.as_ref(), &query, options.pretty)
        }
        Command::RunAll => {
            let source = open_source(options)?;
            run_all(source.as_ref(), options.pretty)
        }
        Command::Check => {
            let source = open_source(options)?;
            check(source.as_ref(), options.pretty)
        }
    }
}

/// Resolves the data source named by the options
pub fn open_source(options: &GlobalOptions) -> CliResult<Box<dyn DataSource>> {
    match &options.data {
        Some(path) => Ok(Box::new(JsonDataSource::load(path)?)),
        None => Ok(Box::new(FixtureSource::new())),
    }
}

/// Print every named query with its description
pub fn list(options: &GlobalOptions) -> CliResult<()> {
    for query in NamedQuery::ALL {
        write_json(
            &json!({"name": query.name(), "description": query.description()}),
            options.pretty,
        )?;
    }
    Ok(())
}

/// Run one named query by name
pub fn run_query(source: &dyn DataSource, name: &str, pretty: bool) -> CliResult<()> {
    let query = name
        .parse::<NamedQuery>()
        .map_err(CliError::unknown_query)?;
    let queries = Queries::new(source);

    let scope = ObservationScope::with_fields("QUERY", &[("query", query.name())]);
    match queries.run(query) {
        Ok(output) => {
            let rows = output.row_count().to_string();
            scope.complete_with_fields(&[("rows", rows.as_str())]);
            write_json(
                &ok_envelope(Some(query.name()), serde_json::to_value(&output)?),
                pretty,
            )
        }
        Err(e) => {
            scope.fail(e.message());
            write_json(
                &error_envelope(Some(query.name()), e.code().code(), e.message()),
                pretty,
            )?;
            Err(e.into())
        }
    }
}

/// Run every named query; non-fatal failures are reported and skipped
pub fn run_all(source: &dyn DataSource, pretty: bool) -> CliResult<()> {
    let queries = Queries::new(source);
    let mut failed = Vec::new();

    for query in NamedQuery::ALL {
        let scope = ObservationScope::with_fields("QUERY", &[("query", query.name())]);
        match queries.run(query) {
            Ok(output) => {
                let rows = output.row_count().to_string();
                scope.complete_with_fields(&[("rows", rows.as_str())]);
                write_json(
                    &ok_envelope(Some(query.name()), serde_json::to_value(&output)?),
                    pretty,
                )?;
            }
            Err(e) => {
                scope.fail(e.message());
                write_json(
                    &error_envelope(Some(query.name()), e.code().code(), e.message()),
                    pretty,
                )?;
                if e.is_fatal() {
                    Logger::fatal("RUN_ALL_ABORTED", &[("query", query.name())]);
                    return Err(e.into());
                }
                failed.push(query.name());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::query_failed(format!(
            "{} queries failed: {}",
            failed.len(),
            failed.join(", ")
        )))
    }
}

/// Validate the dataset and print its record counts
pub fn check(source: &dyn DataSource, pretty: bool) -> CliResult<()> {
    let dataset = Dataset::capture(&source)?;
    dataset.validate()?;

    write_json(
        &ok_envelope(
            None,
            json!({
                "employees": dataset.employees.len(),
                "departments": dataset.departments.len(),
                "salary_grades": dataset.salary_grades.len(),
            }),
        ),
        pretty,
    )
}
