//! JSON output for the CLI
//!
//! One JSON document per line on stdout, or pretty-printed with `--pretty`.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Value};

use super::errors::CliResult;

/// Write any serialisable value to stdout
pub fn write_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let mut stdout = io::stdout();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Build a success envelope
pub fn ok_envelope(query: Option<&str>, data: Value) -> Value {
    match query {
        Some(name) => json!({"status": "ok", "query": name, "data": data}),
        None => json!({"status": "ok", "data": data}),
    }
}

/// Build an error envelope
pub fn error_envelope(query: Option<&str>, code: &str, message: &str) -> Value {
    match query {
        Some(name) => json!({"status": "error", "query": name, "code": code, "message": message}),
        None => json!({"status": "error", "code": code, "message": message}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let value = ok_envelope(Some("max-salary"), json!("5000"));
        assert_eq!(value["status"], "ok");
        assert_eq!(value["query"], "max-salary");
        assert_eq!(value["data"], "5000");
    }

    #[test]
    fn test_error_envelope_without_query() {
        let value = error_envelope(None, "EMPQ_EMPTY_INPUT", "max over empty input");
        assert_eq!(value["status"], "error");
        assert!(value.get("query").is_none());
        assert_eq!(value["code"], "EMPQ_EMPTY_INPUT");
    }
}
