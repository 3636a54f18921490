//! Output records, one per output line

use serde::Serialize;
use serde_json::Value;

/// Identifier of an emitted GeoJSON feature
///
/// Serialized as a bare JSON string or integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// The id column, copied verbatim
    Text(String),

    /// The building sequence number taken from a composite id
    Number(u64),
}

/// A GeoJSON Feature as written to newline-delimited GeoJSON
///
/// Field order here is the key order on the wire:
/// `type`, `geometry`, `properties`, `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureLine {
    #[serde(rename = "type")]
    kind: &'static str,

    /// Parsed geometry, kept as the source JSON
    pub geometry: Value,

    /// Parsed properties, kept as the source JSON
    pub properties: Value,

    pub id: FeatureId,
}

impl FeatureLine {
    pub fn new(geometry: Value, properties: Value, id: FeatureId) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
            id,
        }
    }
}

/// A three-column row of the WKT CSV output
///
/// Fields hold plain text; quoting and quote doubling happen in the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WktRow {
    /// Building identifier, stringified
    pub id: String,

    /// Geometry in Well-Known Text
    pub wkt: String,

    /// Properties JSON with the building id key removed
    pub properties: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_line_key_order() {
        let line = FeatureLine::new(
            json!({"type": "Point", "coordinates": [1, 2]}),
            json!({"name": "A"}),
            FeatureId::Text("1".to_string()),
        );

        assert_eq!(
            serde_json::to_string(&line).unwrap(),
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"name":"A"},"id":"1"}"#
        );
    }

    #[test]
    fn test_numeric_id_serializes_as_integer() {
        let line = FeatureLine::new(json!(null), json!({}), FeatureId::Number(123));
        let text = serde_json::to_string(&line).unwrap();
        assert!(text.ends_with(r#""id":123}"#), "got {}", text);
    }
}
