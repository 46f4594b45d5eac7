//! Line-delimited JSON input reading.

use crate::{Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Reads a line-delimited JSON file into raw record values.
///
/// Each line is parsed independently and input order is preserved. A line
/// that fails to parse is reported with its line number and cause, then
/// skipped; one bad line never aborts the read. Blank lines produce no
/// record.
///
/// Field-level validation is deliberately not done here: the transformer
/// owns the required-field contract and treats violations as fatal.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn read_lines(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path).map_err(|e| Error::OperationFailed {
        operation: "open_input".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;
    read_values(BufReader::new(file))
}

/// Reads raw record values from any buffered reader.
///
/// # Errors
///
/// Returns an error if reading from the underlying source fails.
pub fn read_values<R: BufRead>(reader: R) -> Result<Vec<Value>> {
    let mut records = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::OperationFailed {
            operation: "read_input".to_string(),
            cause: e.to_string(),
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => records.push(value),
            Err(e) => warn!("line {}: skipping unparseable record: {e}", number + 1),
        }
    }

    Ok(records)
}
