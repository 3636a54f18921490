use crate::strategy::AsyncConfig;
use crate::types::BUILDING_ID_KEY;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Convert between building CSV and newline-delimited GeoJSON
#[derive(Parser, Debug)]
#[command(version, about = "Convert between building CSV and newline-delimited GeoJSON", long_about = None)]
pub struct CliArgs {
    /// Input file path
    #[arg(value_name = "INPUT", help = "Path to the input file")]
    pub input_file: PathBuf,

    /// Output file path
    #[arg(
        long = "output",
        short = 'o',
        value_name = "PATH",
        help = "Output file (default: output_from_csv.ndgeojson or output.csv)"
    )]
    pub output: Option<PathBuf>,

    /// Reading strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Reading strategy: 'sync' for blocking reads or 'async' for a channelled reader"
    )]
    pub strategy: StrategyType,

    /// Records the async reader may run ahead of the writer
    #[arg(
        long = "channel-capacity",
        value_name = "COUNT",
        help = "Records the async reader may buffer ahead of the writer (default: 1)"
    )]
    pub channel_capacity: Option<usize>,

    /// Property key holding the building id (GeoJSON → CSV only)
    #[arg(
        long = "id-property",
        value_name = "KEY",
        default_value = BUILDING_ID_KEY,
        help = "Property holding the building id when converting GeoJSON to CSV"
    )]
    pub id_property: String,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Available reading strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create an AsyncConfig from CLI arguments
    ///
    /// Zero falls back to the default with a warning.
    pub fn to_async_config(&self) -> AsyncConfig {
        match self.channel_capacity {
            Some(capacity) => AsyncConfig::new(capacity),
            None => AsyncConfig::default(),
        }
    }
}
