//! CSV → newline-delimited GeoJSON, feature id reduced to the building
//! sequence number of a `<code>-<category>-<sequence>` key
//!
//! ```bash
//! csv-to-ndgeojson-numeric-id buildings.csv  # writes output_from_csv.ndgeojson
//! ```

use geo_transcode::cli;
use geo_transcode::strategy::Conversion;

fn main() {
    cli::main_with(|_| Conversion::CsvToGeoJsonNumericId);
}
