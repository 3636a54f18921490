// CLI module
// Argument parsing, logging setup and the shared entry point of the binaries

mod args;
pub mod logger;

pub use args::{CliArgs, StrategyType};

use crate::core::RunSummary;
use crate::strategy::{create_strategy, Conversion};
use crate::types::TranscodeError;
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints its message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Output path: `--output` if given, else the conversion's conventional name
pub fn output_path(args: &CliArgs, conversion: &Conversion) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(conversion.default_output()))
}

/// Run one conversion as configured by `args`
///
/// The output file is created (or truncated) before the first record is
/// read. On error it is left as far as it got.
pub fn run(args: &CliArgs, conversion: &Conversion) -> Result<RunSummary, TranscodeError> {
    let output_path = output_path(args, conversion);
    let strategy = create_strategy(args.strategy.clone(), Some(args.to_async_config()));

    tracing::info!(
        input = %args.input_file.display(),
        output = %output_path.display(),
        strategy = ?args.strategy,
        "Starting conversion"
    );
    tracing::debug!(?conversion, "Conversion selected");

    let file = File::create(&output_path).map_err(|e| TranscodeError::IoError {
        message: format!(
            "Failed to create output file '{}': {}",
            output_path.display(),
            e
        ),
    })?;
    let mut output = BufWriter::new(file);

    let summary = strategy.process(conversion, &args.input_file, &mut output)?;
    output.flush()?;

    tracing::info!(records = summary.records, "Conversion finished");
    Ok(summary)
}

/// Entry point shared by the binaries
///
/// Parses arguments, sets up logging, runs the conversion chosen by
/// `select` and exits with status 1 on failure.
pub fn main_with(select: impl FnOnce(&CliArgs) -> Conversion) {
    let args = parse_args();
    logger::init_cli_logger(args.verbose);

    let conversion = select(&args);
    if let Err(e) = run(&args, &conversion) {
        tracing::error!("Conversion failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
