//! Asynchronous processing strategy
//!
//! Reads through the async Source Readers and hands records to the
//! pipeline over a bounded channel.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── AsyncConfig (channel_capacity)
//!     ├── producer: AsyncCsvSource / AsyncNdjsonSource ──► mpsc (bounded)
//!     └── consumer: mpsc ──► Pipeline (mapper + sink)
//! ```
//!
//! # Ordering and back-pressure
//!
//! There is one producer and one consumer, and the channel is FIFO, so
//! records are written in input order. With the default capacity of 1 the
//! reader can be at most one record ahead of the writer. Larger capacities
//! let the reader run further ahead; output order is unchanged. Producer and
//! consumer are joined on the same task rather than spawned, which lets the
//! output writer stay a plain `&mut dyn Write`.
//!
//! The first error ends the run: a source error is forwarded and the
//! producer stops; a consumer error drops the receiver, which makes the
//! producer's next send fail.

use crate::core::traits::{AsyncRecordSource, RecordMapper, RecordSink};
use crate::core::{FeatureMapper, Pipeline, RunSummary, WktMapper};
use crate::io::{AsyncCsvSource, AsyncNdjsonSource, FeatureSink, WktCsvSink};
use crate::strategy::{Conversion, ProcessingStrategy};
use crate::types::TranscodeError;
use std::io::Write;
use std::path::Path;
use tokio::sync::mpsc;

/// Configuration for channelled reading
#[derive(Clone, Debug)]
pub struct AsyncConfig {
    /// Records the reader may run ahead of the writer
    pub channel_capacity: usize,
}

impl Default for AsyncConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1,
        }
    }
}

impl AsyncConfig {
    /// Create a new AsyncConfig, falling back to defaults for zero values
    pub fn new(channel_capacity: usize) -> Self {
        let default = Self::default();

        let channel_capacity = if channel_capacity == 0 {
            tracing::warn!(
                "Invalid channel_capacity ({}), using default ({})",
                channel_capacity,
                default.channel_capacity
            );
            default.channel_capacity
        } else {
            channel_capacity
        };

        Self { channel_capacity }
    }
}

/// Asynchronous processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: AsyncConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: AsyncConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(
        &self,
        conversion: &Conversion,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<RunSummary, TranscodeError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .build()
            .map_err(|e| TranscodeError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| TranscodeError::open_failed(input_path, e))?;

            match conversion {
                Conversion::CsvToGeoJson | Conversion::CsvToGeoJsonNumericId => {
                    // csv-async speaks futures::io, so bridge the tokio file
                    let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
                    let source = AsyncCsvSource::new(compat_file);
                    let pipeline = Pipeline::new(
                        FeatureMapper::new(conversion.id_mode()),
                        FeatureSink::new(output),
                    );
                    run_channelled(source, pipeline, self.config.channel_capacity).await
                }
                Conversion::NdGeoJsonToCsv { id_property } => {
                    let source =
                        AsyncNdjsonSource::new(tokio::io::BufReader::with_capacity(8 * 1024, file));
                    let pipeline = Pipeline::new(
                        WktMapper::new(id_property.as_str()),
                        WktCsvSink::new(output),
                    );
                    run_channelled(source, pipeline, self.config.channel_capacity).await
                }
            }
        })
    }
}

/// Run a pipeline fed by `source` through a bounded channel
async fn run_channelled<Src, M, S>(
    mut source: Src,
    mut pipeline: Pipeline<M, S>,
    capacity: usize,
) -> Result<RunSummary, TranscodeError>
where
    Src: AsyncRecordSource<Record = M::Input>,
    M: RecordMapper,
    S: RecordSink<M::Output>,
{
    let (tx, mut rx) = mpsc::channel::<Result<M::Input, TranscodeError>>(capacity.max(1));

    let produce = async move {
        while let Some(item) = source.next_record().await {
            let failed = item.is_err();
            if tx.send(item).await.is_err() || failed {
                break;
            }
        }
        // Dropping tx closes the channel
    };

    let consume = async move {
        while let Some(item) = rx.recv().await {
            if let Err(e) = item.and_then(|raw| pipeline.push(raw)) {
                return Err(e);
            }
        }
        pipeline.finish()
    };

    let ((), result) = futures::join!(produce, consume);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SyncProcessingStrategy;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary input file for testing
    fn create_temp_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn csv_input(rows: usize) -> String {
        let mut content = String::from("id,geometry,attributes\n");
        for i in 0..rows {
            content.push_str(&format!(
                "13101-1-{:06},\"{{\"\"type\"\":\"\"Point\"\",\"\"coordinates\"\":[{},{}]}}\",\"{{\"\"n\"\":{}}}\"\n",
                i, i, i, i
            ));
        }
        content
    }

    #[rstest]
    #[case::capacity_one(1)]
    #[case::capacity_four(4)]
    fn test_async_strategy_matches_sync_output(#[case] capacity: usize) {
        let file = create_temp_input(&csv_input(25));

        let mut sync_output = Vec::new();
        SyncProcessingStrategy
            .process(&Conversion::CsvToGeoJsonNumericId, file.path(), &mut sync_output)
            .unwrap();

        let mut async_output = Vec::new();
        let summary = AsyncProcessingStrategy::new(AsyncConfig::new(capacity))
            .process(&Conversion::CsvToGeoJsonNumericId, file.path(), &mut async_output)
            .unwrap();

        assert_eq!(summary.records, 25);
        assert_eq!(async_output, sync_output);
    }

    #[test]
    fn test_async_strategy_geojson_to_csv() {
        let file = create_temp_input(
            "{\"properties\":{\"建物ID\":\"42\",\"name\":\"X\"},\"geometry\":{\"type\":\"Point\",\"coordinates\":[1,2]}}\n",
        );
        let mut output = Vec::new();

        let conversion = Conversion::NdGeoJsonToCsv {
            id_property: "建物ID".to_string(),
        };
        AsyncProcessingStrategy::new(AsyncConfig::default())
            .process(&conversion, file.path(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\"42\",\"POINT (1 2)\",\"{\"\"name\"\":\"\"X\"\"}\"\n"
        );
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let mut output = Vec::new();
        let result = AsyncProcessingStrategy::new(AsyncConfig::default()).process(
            &Conversion::CsvToGeoJson,
            Path::new("nonexistent.csv"),
            &mut output,
        );

        assert!(matches!(result, Err(TranscodeError::FileNotFound { .. })));
    }

    #[test]
    fn test_async_strategy_stops_on_invalid_json_line() {
        let file = create_temp_input(
            "{\"properties\":{\"建物ID\":\"1\"},\"geometry\":{\"type\":\"Point\",\"coordinates\":[0,0]}}\n\
             not json\n\
             {\"properties\":{\"建物ID\":\"3\"},\"geometry\":{\"type\":\"Point\",\"coordinates\":[0,0]}}\n",
        );
        let mut output = Vec::new();

        let conversion = Conversion::NdGeoJsonToCsv {
            id_property: "建物ID".to_string(),
        };
        let result =
            AsyncProcessingStrategy::new(AsyncConfig::default()).process(&conversion, file.path(), &mut output);

        assert!(matches!(
            result,
            Err(TranscodeError::FormatError { line: Some(2), .. })
        ));
    }

    #[test]
    fn test_async_strategy_stops_on_malformed_field() {
        let file = create_temp_input(&format!("{}abc,null,{{}}\n", csv_input(3)));
        let mut output = Vec::new();

        let result = AsyncProcessingStrategy::new(AsyncConfig::default()).process(
            &Conversion::CsvToGeoJsonNumericId,
            file.path(),
            &mut output,
        );

        assert!(matches!(
            result,
            Err(TranscodeError::MalformedFieldError { record: Some(4), .. })
        ));
    }

    #[test]
    fn test_async_config_zero_capacity_falls_back() {
        assert_eq!(AsyncConfig::new(0).channel_capacity, 1);
        assert_eq!(AsyncConfig::new(8).channel_capacity, 8);
    }
}
