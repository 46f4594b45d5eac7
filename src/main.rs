//! Binary entry point for sftconv.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow direct printing in the main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

use clap::Parser;
use sftconv::convert::{self, ConvertOptions};
use sftconv::{OutputFormat, SftSchema, observability};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

/// Convert question/answer/reasoning datasets into SFT training layouts.
#[derive(Parser)]
#[command(name = "sftconv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the line-delimited JSON dataset.
    input: PathBuf,

    /// Target conversational layout.
    #[arg(short, long, value_enum, default_value_t = SftSchema::ShareGpt)]
    schema: SftSchema,

    /// Output file encoding.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Directory for the converted file (default: the input's directory).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Global system directive. A directive inside a record takes priority.
    #[arg(long)]
    system: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let options = ConvertOptions {
        input: cli.input,
        schema: cli.schema,
        format: cli.format,
        output_dir: cli.output_dir,
        system: cli.system,
    };

    match convert::run(&options) {
        Ok(report) => {
            println!("{}", report.output_path.display());
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        },
    }
}
