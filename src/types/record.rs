//! Raw input records
//!
//! One record is produced per input line and dropped once it has been
//! mapped; nothing here outlives a single line.

use crate::types::TranscodeError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Default property key holding the building identifier ("building ID")
pub const BUILDING_ID_KEY: &str = "建物ID";

/// One row of the delimited-text input
///
/// Columns are matched by header name. Only `id`, `geometry` and
/// `attributes` are consumed; any extra columns are ignored. A missing
/// column is reported by the reader as a format error.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvFeatureRow {
    /// Feature identifier, verbatim
    pub id: String,

    /// JSON-encoded GeoJSON geometry
    pub geometry: String,

    /// JSON-encoded properties object
    pub attributes: String,
}

/// One line of newline-delimited GeoJSON, after shape checking
///
/// Built from a parsed JSON document by [`GeoJsonLine::from_value`], which
/// is where a wrong shape surfaces as a `MalformedFieldError`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonLine {
    /// The feature's properties, in source order
    pub properties: Map<String, Value>,

    /// The feature's geometry
    pub geometry: geojson::Geometry,
}

impl GeoJsonLine {
    /// Check the shape of a parsed line
    ///
    /// The document must be an object with a `properties` object and a
    /// `geometry` holding a supported GeoJSON geometry.
    pub fn from_value(value: Value) -> Result<Self, TranscodeError> {
        let mut object = match value {
            Value::Object(object) => object,
            other => {
                return Err(TranscodeError::malformed_field(
                    "record",
                    format!("expected a JSON object, found {}", json_kind(&other)),
                ))
            }
        };

        let properties = match object.remove("properties") {
            Some(Value::Object(properties)) => properties,
            Some(other) => {
                return Err(TranscodeError::malformed_field(
                    "properties",
                    format!("expected an object, found {}", json_kind(&other)),
                ))
            }
            None => return Err(TranscodeError::malformed_field("properties", "missing")),
        };

        let geometry = match object.remove("geometry") {
            Some(Value::Null) | None => {
                return Err(TranscodeError::malformed_field("geometry", "missing"))
            }
            Some(value) => geojson::Geometry::from_json_value(value)
                .map_err(|e| TranscodeError::malformed_field("geometry", e.to_string()))?,
        };

        Ok(Self {
            properties,
            geometry,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
