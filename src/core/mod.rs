//! Core transcoding components
//!
//! - `traits` - Stage abstractions shared by the sync and async strategies
//! - `pipeline` - Per-run context owning the mapper and the sink
//! - `feature_mapper` - CSV row → GeoJSON Feature (verbatim or numeric id)
//! - `wkt_mapper` - GeoJSON line → WKT CSV row
//! - `wkt` - GeoJSON geometry → Well-Known Text

pub mod feature_mapper;
pub mod pipeline;
pub mod traits;
pub mod wkt;
pub mod wkt_mapper;

pub use feature_mapper::{FeatureMapper, IdMode};
pub use pipeline::{Pipeline, RunSummary};
pub use traits::{AsyncRecordSource, RecordMapper, RecordSink};
pub use wkt_mapper::WktMapper;
