//! Benchmark suite for comparing processing strategies
//!
//! Compares the sync and async strategies with the divan benchmarking
//! framework on generated building data.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Inputs are generated once per benchmark into temporary files, so file
//! creation is not part of the measured time.

use divan::Bencher;
use geo_transcode::cli::StrategyType;
use geo_transcode::strategy::{create_strategy, AsyncConfig, Conversion};
use geo_transcode::BUILDING_ID_KEY;
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn building_csv(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "id,geometry,attributes").unwrap();
    for i in 0..rows {
        writeln!(
            file,
            "13101-1-{i},\"{{\"\"type\"\":\"\"Polygon\"\",\"\"coordinates\"\":[[[139.{i},35.5],[139.{i},35.6],[139.7,35.6],[139.{i},35.5]]]}}\",\"{{\"\"{BUILDING_ID_KEY}\"\":\"\"13101-bldg-{i}\"\",\"\"height\"\":12.5}}\""
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

fn building_ndgeojson(rows: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for i in 0..rows {
        writeln!(
            file,
            "{{\"properties\":{{\"{BUILDING_ID_KEY}\":\"13101-bldg-{i}\",\"height\":12.5}},\"geometry\":{{\"type\":\"Polygon\",\"coordinates\":[[[139.{i},35.5],[139.{i},35.6],[139.7,35.6],[139.{i},35.5]]]}}}}"
        )
        .unwrap();
    }
    file.flush().unwrap();
    file
}

fn bench_conversion(
    bencher: Bencher,
    strategy_type: StrategyType,
    conversion: Conversion,
    input: NamedTempFile,
) {
    let strategy = create_strategy(strategy_type, Some(AsyncConfig::default()));
    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .process(&conversion, input.path(), &mut output)
            .expect("Conversion failed");
        output
    });
}

/// Synchronous CSV → GeoJSON
#[divan::bench(args = SIZES)]
fn sync_csv_to_geojson(bencher: Bencher, rows: usize) {
    bench_conversion(
        bencher,
        StrategyType::Sync,
        Conversion::CsvToGeoJson,
        building_csv(rows),
    );
}

/// Asynchronous CSV → GeoJSON
#[divan::bench(args = SIZES)]
fn async_csv_to_geojson(bencher: Bencher, rows: usize) {
    bench_conversion(
        bencher,
        StrategyType::Async,
        Conversion::CsvToGeoJson,
        building_csv(rows),
    );
}

/// Synchronous GeoJSON → WKT CSV
#[divan::bench(args = SIZES)]
fn sync_geojson_to_csv(bencher: Bencher, rows: usize) {
    bench_conversion(
        bencher,
        StrategyType::Sync,
        Conversion::NdGeoJsonToCsv {
            id_property: BUILDING_ID_KEY.to_string(),
        },
        building_ndgeojson(rows),
    );
}

/// Asynchronous GeoJSON → WKT CSV
#[divan::bench(args = SIZES)]
fn async_geojson_to_csv(bencher: Bencher, rows: usize) {
    bench_conversion(
        bencher,
        StrategyType::Async,
        Conversion::NdGeoJsonToCsv {
            id_property: BUILDING_ID_KEY.to_string(),
        },
        building_ndgeojson(rows),
    );
}
