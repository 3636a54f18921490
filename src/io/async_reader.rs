//! Asynchronous sources
//!
//! Async counterparts of [`CsvSource`](crate::io::csv_source::CsvSource) and
//! [`NdjsonSource`](crate::io::ndjson_source::NdjsonSource), yielding the
//! same records and the same errors for the same input.
//!
//! # Design
//!
//! - csv-async for streaming CSV parsing over any `futures::io::AsyncRead`
//! - `tokio::io::Lines` for line splitting of newline-delimited JSON
//!
//! ```text
//! tokio::fs::File ─compat─► AsyncCsvSource    ─► CsvFeatureRow
//! tokio::fs::File ─BufReader► AsyncNdjsonSource ─► serde_json::Value
//! ```

use crate::core::traits::AsyncRecordSource;
use crate::io::ndjson_source::parse_line;
use crate::types::{CsvFeatureRow, TranscodeError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Asynchronous CSV source
pub struct AsyncCsvSource<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send> AsyncCsvSource<R> {
    /// Create a new AsyncCsvSource from an async reader
    ///
    /// Configured like the sync source: header row required, rows must match
    /// the header's width, no trimming.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .create_deserializer(reader);

        Self { csv_reader }
    }
}

impl<R: AsyncRead + Unpin + Send> AsyncRecordSource for AsyncCsvSource<R> {
    type Record = CsvFeatureRow;

    async fn next_record(&mut self) -> Option<Result<CsvFeatureRow, TranscodeError>> {
        let mut rows = self.csv_reader.deserialize::<CsvFeatureRow>();
        rows.next()
            .await
            .map(|row| row.map_err(TranscodeError::from))
    }
}

/// Asynchronous newline-delimited JSON source
pub struct AsyncNdjsonSource<R: AsyncBufRead + Unpin> {
    lines: Lines<R>,
    line_num: u64,
}

impl<R: AsyncBufRead + Unpin> AsyncNdjsonSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }
}

impl<R: AsyncBufRead + Unpin> AsyncRecordSource for AsyncNdjsonSource<R> {
    type Record = Value;

    async fn next_record(&mut self) -> Option<Result<Value, TranscodeError>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            if let Some(parsed) = parse_line(self.line_num, &line) {
                return Some(parsed);
            }
        }
    }
}
