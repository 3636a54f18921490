//! CSV → newline-delimited GeoJSON, feature id copied from the `id` column
//!
//! ```bash
//! csv-to-ndgeojson buildings.csv            # writes output_from_csv.ndgeojson
//! ```

use geo_transcode::cli;
use geo_transcode::strategy::Conversion;

fn main() {
    cli::main_with(|_| Conversion::CsvToGeoJson);
}
