//! I/O module
//!
//! Source Readers and Sink Writers.
//!
//! # Components
//!
//! - `csv_source` - Synchronous CSV reader with iterator interface
//! - `ndjson_source` - Synchronous newline-delimited JSON reader
//! - `async_reader` - Asynchronous versions of both readers
//! - `sink` - GeoJSON and WKT CSV line writers

pub mod async_reader;
pub mod csv_source;
pub mod ndjson_source;
pub mod sink;

pub use async_reader::{AsyncCsvSource, AsyncNdjsonSource};
pub use csv_source::CsvSource;
pub use ndjson_source::NdjsonSource;
pub use sink::{FeatureSink, WktCsvSink};
