//! # sftconv
//!
//! Converts a flat collection of question/answer/reasoning records into one
//! of the standard supervised-fine-tuning (SFT) training-data layouts, then
//! serializes the result into one of several file formats.
//!
//! The pipeline is strictly read-then-transform-then-write:
//!
//! 1. The reader parses a line-delimited JSON file into raw record values,
//!    skipping and reporting lines that fail to parse.
//! 2. The transformer reshapes each record into one of four conversational
//!    layouts (`messages`, `sharegpt`, `alpaca-style`, `query-response`),
//!    enforcing the `<think>...</think> <answer>...</answer>` contract on
//!    the reasoning response.
//! 3. The serializer writes the transformed sequence as a JSON document,
//!    JSON lines, a delimited table (CSV/TSV), or an Excel workbook.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sftconv::convert::{self, ConvertOptions};
//! use sftconv::{OutputFormat, SftSchema};
//!
//! let report = convert::run(&ConvertOptions {
//!     input: "data/MedThoughts-8K.jsonl".into(),
//!     schema: SftSchema::ShareGpt,
//!     format: OutputFormat::Jsonl,
//!     output_dir: None,
//!     system: None,
//! })?;
//! println!("{} records -> {}", report.converted, report.output_path.display());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod convert;
pub mod io;
pub mod models;
pub mod observability;

// Re-exports for convenience
pub use convert::{ConvertOptions, ConvertReport};
pub use io::formats::OutputFormat;
pub use models::{ChatMessage, ConversationTurn, QaRecord, SftRecord, SftSchema};

/// Error type for sftconv operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// Only line-level parse failures are recoverable, and those never surface
/// here: the reader reports and skips them. Every variant below aborts the
/// run.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid invocation input was provided.
    ///
    /// Raised when:
    /// - The input file does not exist
    /// - An output path cannot be derived from the input path
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An input record violated the required-field contract.
    ///
    /// Required fields (`question`, `options`, `answer_idx`, `ds_think`) are
    /// a minimal data contract; a record missing one is a dataset defect the
    /// run must surface rather than skip.
    #[error("record {index}: {cause}")]
    InvalidRecord {
        /// Zero-based index of the record in the parsed input sequence.
        index: usize,
        /// The underlying deserialization failure.
        cause: String,
    },

    /// A composed reasoning response failed its structural contract.
    ///
    /// The response must match
    /// `^<think>.*?</think>\s*<answer>.*?</answer>$` across embedded
    /// newlines. A violation signals an unusable upstream reasoning trace
    /// and aborts the whole run with no output written.
    #[error(
        "record {index}: reasoning response does not match \
         <think>...</think> <answer>...</answer>"
    )]
    MalformedReasoning {
        /// Zero-based index of the offending record.
        index: usize,
    },

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur
    /// - A record cannot be encoded for the selected output format
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for sftconv operations.
pub type Result<T> = std::result::Result<T, Error>;
