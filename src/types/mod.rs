//! Types module
//!
//! Contains the data structures passed between pipeline stages:
//! - `record`: raw input records (CSV rows, GeoJSON lines)
//! - `output`: output records (GeoJSON features, WKT rows)
//! - `error`: error types for the transcoder

pub mod error;
pub mod output;
pub mod record;

pub use error::TranscodeError;
pub use output::{FeatureId, FeatureLine, WktRow};
pub use record::{CsvFeatureRow, GeoJsonLine, BUILDING_ID_KEY};
