//! Output format selection and dispatch.
//!
//! Document formats (`json`, `jsonl`) serialize the record sequence
//! directly; tabular formats (`csv`, `tsv`, `xlsx`) first flatten it into a
//! rectangular table. The format set is closed and dispatch is an
//! exhaustive match, so a typo in a selector dies at argument-parse time
//! rather than at first write.

pub mod csv;
pub mod json;
pub mod table;
pub mod xlsx;

use crate::models::SftRecord;
use crate::{Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array, one document.
    Json,
    /// One compact JSON object per line.
    Jsonl,
    /// Comma-separated table, fully quoted.
    Csv,
    /// Tab-separated table, fully quoted.
    Tsv,
    /// Excel workbook, single sheet.
    Xlsx,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Xlsx => "xlsx",
        }
    }

    /// Returns whether this format writes a rectangular table.
    #[must_use]
    pub const fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv | Self::Tsv | Self::Xlsx)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" | "ndjson" => Ok(Self::Jsonl),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(Error::InvalidInput(format!("unknown output format: {s}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Writes the complete record sequence to `path` in the requested format.
///
/// # Errors
///
/// Returns an error if a record cannot be encoded or the file cannot be
/// written. No partial file is acceptable output; encoding failures
/// surface before bytes hit the disk for the document formats.
pub fn write_records(records: &[SftRecord], format: OutputFormat, path: &Path) -> Result<()> {
    match format {
        OutputFormat::Json => json::write_document(records, path),
        OutputFormat::Jsonl => json::write_lines(records, path),
        OutputFormat::Csv => csv::write_table(records, path, b','),
        OutputFormat::Tsv => csv::write_table(records, path, b'\t'),
        OutputFormat::Xlsx => xlsx::write_workbook(records, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("JSONL").unwrap(), OutputFormat::Jsonl);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("tsv").unwrap(), OutputFormat::Tsv);
        assert_eq!(OutputFormat::from_str("xlsx").unwrap(), OutputFormat::Xlsx);
        assert!(OutputFormat::from_str("parquet").is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
        assert_eq!(OutputFormat::Xlsx.extension(), "xlsx");
    }

    #[test]
    fn test_tabular_split() {
        assert!(!OutputFormat::Json.is_tabular());
        assert!(!OutputFormat::Jsonl.is_tabular());
        assert!(OutputFormat::Csv.is_tabular());
        assert!(OutputFormat::Tsv.is_tabular());
        assert!(OutputFormat::Xlsx.is_tabular());
    }
}
