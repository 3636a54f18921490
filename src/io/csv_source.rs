//! Synchronous CSV source with iterator interface
//!
//! Streams [`CsvFeatureRow`]s from a file whose first line is a header. The
//! header is captured once when iteration starts and names the fields of
//! every following row.
//!
//! # Iterator Interface
//!
//! ```no_run
//! use geo_transcode::io::csv_source::CsvSource;
//! use std::path::Path;
//!
//! let source = CsvSource::open(Path::new("buildings.csv")).unwrap();
//! for row in source {
//!     let row = row.unwrap();
//!     println!("{}", row.id);
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failure to open the file is returned from `open()`
//! - A row whose column count differs from the header's, or that lacks a
//!   required column, is yielded as a `FormatError` with its line number
//!
//! The caller aborts on the first error; the iterator does not try to
//! resynchronise after one.

use crate::types::{CsvFeatureRow, TranscodeError};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV source
///
/// Holds the only read handle on the input until it is dropped.
#[derive(Debug)]
pub struct CsvSource<R: Read = File> {
    reader: csv::Reader<R>,
}

impl CsvSource<File> {
    /// Open a CSV file for streaming
    pub fn open(path: &Path) -> Result<Self, TranscodeError> {
        let file = File::open(path).map_err(|e| TranscodeError::open_failed(path, e))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap any byte stream
    ///
    /// Rows must have exactly as many fields as the header. Fields are not
    /// trimmed since they carry JSON text.
    pub fn from_reader(reader: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        Self { reader }
    }
}

impl<R: Read> Iterator for CsvSource<R> {
    type Item = Result<CsvFeatureRow, TranscodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut rows = self.reader.deserialize::<CsvFeatureRow>();
        rows.next().map(|row| row.map_err(TranscodeError::from))
    }
}
