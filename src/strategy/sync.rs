//! Synchronous processing strategy
//!
//! Single-threaded, blocking. Each record is read, mapped and written before
//! the next read is issued, so at most one record is in flight.
//!
//! # Design
//!
//! The strategy only orchestrates:
//! - reading to `CsvSource` / `NdjsonSource` (iterator interface)
//! - mapping to `FeatureMapper` / `WktMapper`
//! - writing to `FeatureSink` / `WktCsvSink`

use crate::core::{FeatureMapper, Pipeline, RunSummary, WktMapper};
use crate::io::{CsvSource, FeatureSink, NdjsonSource, WktCsvSink};
use crate::strategy::{Conversion, ProcessingStrategy};
use crate::types::TranscodeError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use geo_transcode::strategy::{Conversion, ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy
///     .process(&Conversion::CsvToGeoJson, Path::new("buildings.csv"), &mut output)
///     .expect("Conversion failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(
        &self,
        conversion: &Conversion,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, TranscodeError> {
        match conversion {
            Conversion::CsvToGeoJson | Conversion::CsvToGeoJsonNumericId => {
                let source = CsvSource::open(input_path)?;
                let pipeline = Pipeline::new(
                    FeatureMapper::new(conversion.id_mode()),
                    FeatureSink::new(output),
                );
                pipeline.run(source)
            }
            Conversion::NdGeoJsonToCsv { id_property } => {
                let source = NdjsonSource::open(input_path)?;
                let pipeline =
                    Pipeline::new(WktMapper::new(id_property.as_str()), WktCsvSink::new(output));
                pipeline.run(source)
            }
        }
    }
}
