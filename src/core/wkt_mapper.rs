//! GeoJSON line → WKT CSV row mapping

use crate::core::traits::RecordMapper;
use crate::core::wkt::to_wkt;
use crate::types::{GeoJsonLine, TranscodeError, WktRow, BUILDING_ID_KEY};
use serde_json::{Map, Value};

/// Maps parsed GeoJSON lines to [`WktRow`]s
///
/// The configured id property becomes the row id and is dropped from the
/// properties payload; every other property keeps its position. Integral
/// floats such as `10.0` are written as integers (`10`), matching how
/// JavaScript serializes numbers.
#[derive(Debug, Clone)]
pub struct WktMapper {
    id_property: String,
}

impl Default for WktMapper {
    fn default() -> Self {
        Self::new(BUILDING_ID_KEY)
    }
}

impl WktMapper {
    pub fn new(id_property: impl Into<String>) -> Self {
        Self {
            id_property: id_property.into(),
        }
    }

    pub fn id_property(&self) -> &str {
        &self.id_property
    }

    fn stringify_id(&self, value: Option<&Value>) -> Result<String, TranscodeError> {
        match value {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => {
                Ok(integral_floats_as_integers(Value::Number(n.clone())).to_string())
            }
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(Value::Null) | None => Err(TranscodeError::malformed_field(
                &self.id_property,
                "missing from properties",
            )),
            Some(_) => Err(TranscodeError::malformed_field(
                &self.id_property,
                "expected a string or number",
            )),
        }
    }
}

impl RecordMapper for WktMapper {
    type Input = Value;
    type Output = WktRow;

    fn map(&self, raw: Value) -> Result<WktRow, TranscodeError> {
        let line = GeoJsonLine::from_value(raw)?;
        let id = self.stringify_id(line.properties.get(&self.id_property))?;
        let wkt = to_wkt(&line.geometry);

        let remaining: Map<String, Value> = line
            .properties
            .into_iter()
            .filter(|(key, _)| key != &self.id_property)
            .map(|(key, value)| (key, integral_floats_as_integers(value)))
            .collect();
        let properties = serde_json::to_string(&remaining)
            .map_err(|e| TranscodeError::malformed_field("properties", e.to_string()))?;

        Ok(WktRow {
            id,
            wkt,
            properties,
        })
    }
}

/// Largest magnitude below which every integer is exactly representable
const MAX_SAFE_FLOAT: f64 = 9_007_199_254_740_992.0;

fn integral_floats_as_integers(value: Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < MAX_SAFE_FLOAT => Value::from(f as i64),
            _ => Value::Number(n),
        },
        Value::Array(items) => {
            Value::Array(items.into_iter().map(integral_floats_as_integers).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, integral_floats_as_integers(value)))
                .collect(),
        ),
        other => other,
    }
}
