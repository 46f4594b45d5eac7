//! Delimited-table writers (CSV and TSV).
//!
//! The two encodings differ only in field delimiter; both quote every
//! field and write UTF-8.

use super::table::columnize;
use crate::models::SftRecord;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Writes the records to `path` as a fully quoted delimited table.
///
/// # Errors
///
/// Returns an error if columnization fails or the file cannot be written.
pub fn write_table(records: &[SftRecord], path: &Path, delimiter: u8) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| Error::OperationFailed {
        operation: "create_output".to_string(),
        cause: format!("{}: {e}", path.display()),
    })?;
    write_table_to(records, file, delimiter)
}

/// Writes a fully quoted delimited table to any writer.
///
/// # Errors
///
/// Returns an error if columnization or writing fails.
pub fn write_table_to<W: Write>(records: &[SftRecord], writer: W, delimiter: u8) -> Result<()> {
    let table = columnize(records)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer
        .write_record(&table.columns)
        .map_err(|e| write_failed(&e))?;
    for row in &table.rows {
        csv_writer.write_record(row).map_err(|e| write_failed(&e))?;
    }

    csv_writer.flush().map_err(|e| Error::OperationFailed {
        operation: "flush_table".to_string(),
        cause: e.to_string(),
    })
}

fn write_failed(e: &csv::Error) -> Error {
    Error::OperationFailed {
        operation: "write_table".to_string(),
        cause: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<SftRecord> {
        vec![
            SftRecord::query_response(Some("sys".to_string()), "q1".to_string(), "r1".to_string()),
            SftRecord::query_response(None, "q2".to_string(), "r2".to_string()),
        ]
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let mut output = Vec::new();
        write_table_to(&sample_records(), &mut output, b',').unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "\"system\",\"query\",\"response\"");
        assert_eq!(lines.next().unwrap(), "\"sys\",\"q1\",\"r1\"");
        assert_eq!(lines.next().unwrap(), "\"\",\"q2\",\"r2\"");
    }

    #[test]
    fn test_tsv_uses_tab_delimiter() {
        let mut output = Vec::new();
        write_table_to(&sample_records(), &mut output, b'\t').unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("\"system\"\t\"query\"\t\"response\""));
    }

    #[test]
    fn test_embedded_newlines_stay_inside_quotes() {
        let records = vec![SftRecord::query_response(
            None,
            "line one\nline two".to_string(),
            "r".to_string(),
        )];
        let mut output = Vec::new();
        write_table_to(&records, &mut output, b',').unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"line one\nline two\""));
    }
}
