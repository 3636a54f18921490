//! Processing strategy module
//!
//! A strategy runs one complete conversion: it opens the input, wires the
//! matching Source Reader, Record Mapper and Sink Writer into a
//! [`Pipeline`](crate::core::Pipeline), and drives it to the end of the
//! input. Strategies differ only in how reading is scheduled; for the same
//! input they produce byte-identical output.

use crate::cli::StrategyType;
use crate::core::{IdMode, RunSummary};
use crate::types::TranscodeError;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncConfig, AsyncProcessingStrategy};
pub use sync::SyncProcessingStrategy;

/// The three supported conversions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// CSV → newline-delimited GeoJSON, id copied verbatim
    CsvToGeoJson,

    /// CSV → newline-delimited GeoJSON, id reduced to its sequence number
    CsvToGeoJsonNumericId,

    /// Newline-delimited GeoJSON → CSV with WKT geometry
    NdGeoJsonToCsv {
        /// Property holding the building id
        id_property: String,
    },
}

impl Conversion {
    /// Conventional output file name for this conversion
    pub fn default_output(&self) -> &'static str {
        match self {
            Conversion::CsvToGeoJson | Conversion::CsvToGeoJsonNumericId => {
                "output_from_csv.ndgeojson"
            }
            Conversion::NdGeoJsonToCsv { .. } => "output.csv",
        }
    }

    /// Id handling for the CSV → GeoJSON conversions
    pub(crate) fn id_mode(&self) -> IdMode {
        match self {
            Conversion::CsvToGeoJsonNumericId => IdMode::SequenceNumber,
            _ => IdMode::Verbatim,
        }
    }
}

/// Processing strategy trait for complete conversion runs
pub trait ProcessingStrategy: Send + Sync {
    /// Convert `input_path` and write every output line to `output`
    ///
    /// # Errors
    ///
    /// Returns the first error met: the input cannot be opened, a record is
    /// structurally broken (`FormatError`), a field is malformed
    /// (`MalformedFieldError`), or the output cannot be written. Lines
    /// already written before the error remain in `output`.
    fn process(
        &self,
        conversion: &Conversion,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, TranscodeError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is ignored for the sync strategy.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<AsyncConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
