//! Sink writers
//!
//! Each sink owns the output handle for the run and turns one output record
//! into exactly one line. Writes happen in call order; `flush` pushes any
//! buffered bytes to the handle.

use crate::core::traits::RecordSink;
use crate::types::{FeatureLine, TranscodeError, WktRow};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Writes GeoJSON features as newline-delimited JSON
///
/// One compact JSON document per line, UTF-8, no trailing comma.
pub struct FeatureSink<W: Write> {
    output: W,
}

impl<W: Write> FeatureSink<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> RecordSink<FeatureLine> for FeatureSink<W> {
    fn write_record(&mut self, record: &FeatureLine) -> Result<(), TranscodeError> {
        serde_json::to_writer(&mut self.output, record).map_err(|e| {
            TranscodeError::IoError {
                message: format!("Failed to write feature: {}", e),
            }
        })?;
        self.output.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TranscodeError> {
        self.output.flush()?;
        Ok(())
    }
}

/// Writes three-column WKT rows as CSV
///
/// Every field is wrapped in double quotes and embedded quotes are doubled,
/// so each line reads `"<id>","<WKT>","<properties JSON>"`. No header row
/// is written.
pub struct WktCsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> WktCsvSink<W> {
    pub fn new(output: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .double_quote(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(output);

        Self { writer }
    }
}

impl<W: Write> RecordSink<WktRow> for WktCsvSink<W> {
    fn write_record(&mut self, record: &WktRow) -> Result<(), TranscodeError> {
        self.writer
            .write_record([&record.id, &record.wkt, &record.properties])
            .map_err(|e| TranscodeError::IoError {
                message: format!("Failed to write CSV row: {}", e),
            })
    }

    fn flush(&mut self) -> Result<(), TranscodeError> {
        self.writer.flush()?;
        Ok(())
    }
}
