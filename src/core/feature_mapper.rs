//! CSV row → GeoJSON Feature mapping
//!
//! The `geometry` and `attributes` columns are JSON text and are parsed into
//! the feature verbatim. The feature id is either the `id` column as-is or,
//! for composite building keys, its numeric sequence part.

use crate::core::traits::RecordMapper;
use crate::types::{CsvFeatureRow, FeatureId, FeatureLine, TranscodeError};
use serde_json::Value;

/// How the output feature id is derived from the `id` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    /// Copy the id string unchanged
    #[default]
    Verbatim,

    /// Parse `<prefecture-town code>-<building category>-<sequence>` and
    /// keep the sequence number as an integer
    SequenceNumber,
}

/// Maps [`CsvFeatureRow`]s to [`FeatureLine`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureMapper {
    id_mode: IdMode,
}

impl FeatureMapper {
    pub fn new(id_mode: IdMode) -> Self {
        Self { id_mode }
    }
}

impl RecordMapper for FeatureMapper {
    type Input = CsvFeatureRow;
    type Output = FeatureLine;

    fn map(&self, row: CsvFeatureRow) -> Result<FeatureLine, TranscodeError> {
        let geometry = parse_json_field("geometry", &row.geometry)?;
        let properties = parse_json_field("attributes", &row.attributes)?;
        let id = match self.id_mode {
            IdMode::Verbatim => FeatureId::Text(row.id),
            IdMode::SequenceNumber => FeatureId::Number(sequence_number(&row.id)?),
        };

        Ok(FeatureLine::new(geometry, properties, id))
    }
}

fn parse_json_field(field: &str, text: &str) -> Result<Value, TranscodeError> {
    serde_json::from_str(text)
        .map_err(|e| TranscodeError::malformed_field(field, format!("invalid JSON: {}", e)))
}

/// Extract the building sequence number from a composite id
///
/// The first two components are only checked by position.
pub fn sequence_number(id: &str) -> Result<u64, TranscodeError> {
    let parts: Vec<&str> = id.split('-').collect();
    let [_, _, sequence] = parts.as_slice() else {
        return Err(TranscodeError::malformed_field(
            "id",
            format!(
                "expected 3 hyphen-separated components in '{}', found {}",
                id,
                parts.len()
            ),
        ));
    };

    // `u64::from_str` would also take a leading '+'
    if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TranscodeError::malformed_field(
            "id",
            format!("sequence number '{}' in '{}' is not all digits", sequence, id),
        ));
    }

    sequence.parse::<u64>().map_err(|e| {
        TranscodeError::malformed_field(
            "id",
            format!("sequence number '{}' in '{}' is not an integer: {}", sequence, id, e),
        )
    })
}
