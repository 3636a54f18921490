//! Newline-delimited GeoJSON → `"<id>","<WKT>","<properties>"` CSV
//!
//! ```bash
//! ndgeojson-to-csv buildings.ndgeojson       # writes output.csv
//! ndgeojson-to-csv --id-property gid buildings.ndgeojson
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (input missing or unreadable, malformed record, output not writable)

use geo_transcode::cli;
use geo_transcode::strategy::Conversion;

fn main() {
    cli::main_with(|args| Conversion::NdGeoJsonToCsv {
        id_property: args.id_property.clone(),
    });
}
