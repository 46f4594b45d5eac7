//! JSON document and JSON-lines writers.

use crate::io::sanitize::to_document_value;
use crate::models::SftRecord;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Renders the records as one pretty-printed JSON array.
///
/// Four-space indentation; non-ASCII characters pass through verbatim.
///
/// # Errors
///
/// Returns an error if a record cannot be encoded.
pub fn render_document(records: &[SftRecord]) -> Result<String> {
    let values = records
        .iter()
        .map(to_document_value)
        .collect::<Result<Vec<Value>>>()?;

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    values
        .serialize(&mut serializer)
        .map_err(|e| encode_failed(&e))?;

    String::from_utf8(buffer).map_err(|e| Error::OperationFailed {
        operation: "render_json".to_string(),
        cause: e.to_string(),
    })
}

/// Renders the records as newline-joined compact JSON objects.
///
/// One record per line with no blank lines interspersed and no trailing
/// newline.
///
/// # Errors
///
/// Returns an error if a record cannot be encoded.
pub fn render_lines(records: &[SftRecord]) -> Result<String> {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        let value = to_document_value(record)?;
        lines.push(serde_json::to_string(&value).map_err(|e| encode_failed(&e))?);
    }
    Ok(lines.join("\n"))
}

/// Writes the records to `path` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_document(records: &[SftRecord], path: &Path) -> Result<()> {
    let document = render_document(records)?;
    write_file(path, &document)
}

/// Writes the records to `path` as JSON lines.
///
/// # Errors
///
/// Returns an error if encoding or writing fails.
pub fn write_lines(records: &[SftRecord], path: &Path) -> Result<()> {
    let document = render_lines(records)?;
    write_file(path, &document)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| Error::OperationFailed {
        operation: "write_output".to_string(),
        cause: format!("{}: {e}", path.display()),
    })
}

fn encode_failed(e: &serde_json::Error) -> Error {
    Error::OperationFailed {
        operation: "encode_record".to_string(),
        cause: e.to_string(),
    }
}
