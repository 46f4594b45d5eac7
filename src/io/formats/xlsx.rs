//! Excel workbook writer.

use super::table::columnize;
use crate::models::SftRecord;
use crate::{Error, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes the records to `path` as a single-sheet workbook.
///
/// The sheet carries a header row followed by one row per record; every
/// cell is written as a string, matching the delimited-table writers.
///
/// # Errors
///
/// Returns an error if columnization fails or the workbook cannot be
/// written.
pub fn write_workbook(records: &[SftRecord], path: &Path) -> Result<()> {
    let mut workbook = build_workbook(records)?;
    workbook.save(path).map_err(|e| Error::OperationFailed {
        operation: "write_xlsx".to_string(),
        cause: format!("{}: {e}", path.display()),
    })
}

fn build_workbook(records: &[SftRecord]) -> Result<Workbook> {
    let table = columnize(records)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet
            .write_string(0, cell_column(col)?, name.as_str())
            .map_err(|e| write_failed(&e))?;
    }
    for (row, cells) in table.rows.iter().enumerate() {
        let row_number = cell_row(row)?;
        for (col, cell) in cells.iter().enumerate() {
            worksheet
                .write_string(row_number, cell_column(col)?, cell.as_str())
                .map_err(|e| write_failed(&e))?;
        }
    }

    Ok(workbook)
}

fn cell_column(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| Error::OperationFailed {
        operation: "write_xlsx".to_string(),
        cause: format!("too many columns for a worksheet: {index}"),
    })
}

fn cell_row(index: usize) -> Result<u32> {
    // Row 0 is the header.
    u32::try_from(index + 1).map_err(|_| Error::OperationFailed {
        operation: "write_xlsx".to_string(),
        cause: format!("too many rows for a worksheet: {index}"),
    })
}

fn write_failed(e: &rust_xlsxwriter::XlsxError) -> Error {
    Error::OperationFailed {
        operation: "write_xlsx".to_string(),
        cause: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_builds_and_saves() {
        let records = vec![
            SftRecord::query_response(Some("sys".to_string()), "q1".to_string(), "r1".to_string()),
            SftRecord::query_response(None, "q2".to_string(), "r2".to_string()),
        ];
        let mut workbook = build_workbook(&records).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        // XLSX files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_empty_sequence_builds() {
        let mut workbook = build_workbook(&[]).unwrap();
        assert!(workbook.save_to_buffer().is_ok());
    }
}
