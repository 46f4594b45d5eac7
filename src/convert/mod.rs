//! The record transformation pipeline.
//!
//! Wires the reader, the per-record transformer, and the output serializer
//! into a single synchronous run: raw lines become typed records, typed
//! records become one of the four SFT layouts, and the transformed sequence
//! is written exactly once. The output file is only created after every
//! record has transformed successfully.

mod prompt;

pub use prompt::{compose_prompt, compose_reasoning, resolve_system, validate_reasoning};

use crate::io::formats::{self, OutputFormat};
use crate::io::reader;
use crate::models::{QaRecord, SftRecord, SftSchema};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

/// Immutable configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Path to the line-delimited JSON dataset.
    pub input: PathBuf,
    /// Target conversational layout.
    pub schema: SftSchema,
    /// Output file encoding.
    pub format: OutputFormat,
    /// Directory for the output file. Defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
    /// Global system-directive override. A per-record directive wins.
    pub system: Option<String>,
}

/// Summary of a completed conversion run.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Number of records successfully parsed from the input.
    pub input_records: usize,
    /// Number of records transformed and written.
    pub converted: usize,
    /// Path of the written output file.
    pub output_path: PathBuf,
}

/// Transforms one raw record value into the selected layout.
///
/// Pure given its inputs: resolves the system directive, composes the user
/// prompt and the reasoning response, validates the reasoning contract, and
/// assembles the layout variant. `index` identifies the record in error
/// messages.
///
/// # Errors
///
/// Returns [`Error::InvalidRecord`] when a required field is missing or
/// mistyped, and [`Error::MalformedReasoning`] when the composed reasoning
/// response violates its structural contract. Both are fatal for the run.
pub fn transform_record(
    value: serde_json::Value,
    index: usize,
    schema: SftSchema,
    system_override: Option<&str>,
) -> Result<SftRecord> {
    let record: QaRecord = serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
        index,
        cause: e.to_string(),
    })?;

    let system = prompt::resolve_system(system_override, record.system.as_deref());
    let user_prompt = prompt::compose_prompt(&record.question, &record.options);
    let response = prompt::compose_reasoning(&record.ds_think, &record.answer_idx)
        .ok_or(Error::MalformedReasoning { index })?;

    Ok(match schema {
        SftSchema::Messages => SftRecord::messages(system, user_prompt, response),
        SftSchema::ShareGpt => SftRecord::sharegpt(system, user_prompt, response),
        SftSchema::Alpaca => SftRecord::alpaca(system, user_prompt, response),
        SftSchema::QueryResponse => SftRecord::query_response(system, user_prompt, response),
    })
}

/// Runs the full conversion pipeline.
///
/// # Errors
///
/// Returns an error if the input file is missing, any record violates the
/// required-field or reasoning contracts, or the output cannot be written.
pub fn run(options: &ConvertOptions) -> Result<ConvertReport> {
    if !options.input.is_file() {
        return Err(Error::InvalidInput(format!(
            "input file {} does not exist",
            options.input.display()
        )));
    }
    let output_path = output_path(
        &options.input,
        options.output_dir.as_deref(),
        options.schema,
        options.format,
    )?;

    info!(
        "converting {} into the {} layout",
        options.input.display(),
        options.schema
    );

    let values = reader::read_lines(&options.input)?;
    let input_records = values.len();
    info!("parsed {input_records} records from {}", options.input.display());

    let progress = progress_bar(input_records as u64);
    let mut records = Vec::with_capacity(input_records);
    for (index, value) in values.into_iter().enumerate() {
        records.push(transform_record(
            value,
            index,
            options.schema,
            options.system.as_deref(),
        )?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    formats::write_records(&records, options.format, &output_path)?;
    info!("wrote {} records to {}", records.len(), output_path.display());

    Ok(ConvertReport {
        input_records,
        converted: records.len(),
        output_path,
    })
}

/// Builds `{output_dir}/{input_stem}_{schema}.{extension}`.
fn output_path(
    input: &Path,
    output_dir: Option<&Path>,
    schema: SftSchema,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "cannot derive an output name from {}",
                input.display()
            ))
        })?;
    let dir = output_dir.map_or_else(
        || input.parent().unwrap_or(Path::new(".")).to_path_buf(),
        Path::to_path_buf,
    );
    Ok(dir.join(format!("{stem}_{schema}.{}", format.extension())))
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{wide_bar} {pos}/{len} ({eta})") {
        pb.set_style(style);
    }
    pb
}
