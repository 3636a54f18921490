//! Whole-run properties
//!
//! - one output line per input record
//! - repeated runs give byte-identical output
//! - CSV → GeoJSON → CSV keeps geometry and every property except the
//!   building id, which becomes the row id

#[cfg(test)]
mod tests {
    use geo_transcode::cli::StrategyType;
    use geo_transcode::strategy::{create_strategy, Conversion};
    use geo_transcode::BUILDING_ID_KEY;
    use rstest::rstest;
    use serde_json::{json, Value};
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn convert(strategy: StrategyType, conversion: &Conversion, input: &Path) -> String {
        let mut output = Vec::new();
        create_strategy(strategy, None)
            .process(conversion, input, &mut output)
            .unwrap_or_else(|e| panic!("Conversion failed: {}", e));
        String::from_utf8(output).unwrap()
    }

    /// Quote a field the way a CSV writer would
    fn csv_field(text: &str) -> String {
        format!("\"{}\"", text.replace('"', "\"\""))
    }

    fn building_csv(rows: usize) -> String {
        let mut content = String::from("id,geometry,attributes\n");
        for i in 0..rows {
            let geometry = json!({
                "type": "Polygon",
                "coordinates": [[[i, 0], [i + 1, 0], [i + 1, 1], [i, 0]]]
            });
            let attributes = json!({
                "name": format!("building \"{}\"", i),
                BUILDING_ID_KEY: format!("13101-bldg-{}", i),
                "height": 3.5,
                "tags": ["a", "b"]
            });
            content.push_str(&format!(
                "13101-1-{},{},{}\n",
                i,
                csv_field(&geometry.to_string()),
                csv_field(&attributes.to_string())
            ));
        }
        content
    }

    #[rstest]
    #[case::none(0)]
    #[case::one(1)]
    #[case::many(40)]
    fn test_output_line_count_matches_input(
        #[case] rows: usize,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let input = temp_file(&building_csv(rows));
        let output = convert(strategy, &Conversion::CsvToGeoJson, input.path());
        assert_eq!(output.lines().count(), rows);
    }

    #[rstest]
    fn test_repeated_runs_are_identical(
        #[values(Conversion::CsvToGeoJson, Conversion::CsvToGeoJsonNumericId)] conversion: Conversion,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let input = temp_file(&building_csv(10));
        let first = convert(strategy.clone(), &conversion, input.path());
        let second = convert(strategy, &conversion, input.path());
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_csv_geojson_csv_round_trip(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let input = temp_file(&building_csv(5));
        let geojson = convert(strategy.clone(), &Conversion::CsvToGeoJson, input.path());

        let intermediate = temp_file(&geojson);
        let conversion = Conversion::NdGeoJsonToCsv {
            id_property: BUILDING_ID_KEY.to_string(),
        };
        let csv_text = convert(strategy, &conversion, intermediate.path());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv_text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 5);

        for (i, row) in rows.iter().enumerate() {
            assert_eq!(&row[0], format!("13101-bldg-{}", i));
            assert_eq!(
                &row[1],
                format!("POLYGON (({} 0, {} 0, {} 1, {} 0))", i, i + 1, i + 1, i)
            );

            let properties: Value = serde_json::from_str(&row[2]).unwrap();
            assert_eq!(
                properties,
                json!({
                    "name": format!("building \"{}\"", i),
                    "height": 3.5,
                    "tags": ["a", "b"]
                })
            );
        }
    }

    #[test]
    fn test_numeric_ids_follow_sequence_numbers() {
        let input = temp_file(&building_csv(3));
        let output = convert(
            StrategyType::Sync,
            &Conversion::CsvToGeoJsonNumericId,
            input.path(),
        );

        let ids: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!(0), json!(1), json!(2)]);
    }
}
