//! Columnization of record sequences into rectangular tables.

use crate::io::sanitize::to_document_value;
use crate::models::SftRecord;
use crate::{Error, Result};
use serde_json::Value;

/// A rectangular table derived from a record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, in first-seen order across the records.
    pub columns: Vec<String>,
    /// One row of cells per record, aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

/// Flattens records into a table.
///
/// Outer keys become columns; records missing a column fill the cell with
/// the empty string, so heterogeneous key sets (a directive present on some
/// records only) are tolerated. String values render verbatim, nested
/// values as compact JSON.
///
/// # Errors
///
/// Returns an error if a record cannot be encoded or does not encode to a
/// JSON object.
pub fn columnize(records: &[SftRecord]) -> Result<Table> {
    let mut objects = Vec::with_capacity(records.len());
    let mut columns: Vec<String> = Vec::new();

    for record in records {
        let Value::Object(map) = to_document_value(record)? else {
            return Err(Error::OperationFailed {
                operation: "columnize".to_string(),
                cause: "record did not encode to a JSON object".to_string(),
            });
        };
        for key in map.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.clone());
            }
        }
        objects.push(map);
    }

    let mut rows = Vec::with_capacity(objects.len());
    for object in &objects {
        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            row.push(match object.get(column) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(nested) => serde_json::to_string(nested).map_err(|e| {
                    Error::OperationFailed {
                        operation: "columnize".to_string(),
                        cause: e.to_string(),
                    }
                })?,
            });
        }
        rows.push(row);
    }

    Ok(Table { columns, rows })
}
