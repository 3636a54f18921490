//! Synchronous newline-delimited JSON source
//!
//! Splits the input on line boundaries and parses each non-empty line as
//! one JSON document. Blank lines (including whitespace-only ones) are
//! skipped; a line that is not valid JSON is yielded as a `FormatError`
//! carrying its 1-based line number.

use crate::types::TranscodeError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

/// Parse one line, or `None` if it is blank
pub(crate) fn parse_line(line_number: u64, line: &str) -> Option<Result<Value, TranscodeError>> {
    if line.trim().is_empty() {
        return None;
    }
    Some(
        serde_json::from_str(line)
            .map_err(|e| TranscodeError::format(line_number, format!("invalid JSON: {}", e))),
    )
}

/// Synchronous line-JSON source
#[derive(Debug)]
pub struct NdjsonSource<R: Read = File> {
    lines: Lines<BufReader<R>>,
    line_num: u64,
}

impl NdjsonSource<File> {
    /// Open a newline-delimited JSON file for streaming
    pub fn open(path: &Path) -> Result<Self, TranscodeError> {
        let file = File::open(path).map_err(|e| TranscodeError::open_failed(path, e))?;
        Ok(Self::from_reader(file))
    }
}

impl<R: Read> NdjsonSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: BufReader::with_capacity(8 * 1024, reader).lines(),
            line_num: 0,
        }
    }
}

impl<R: Read> Iterator for NdjsonSource<R> {
    type Item = Result<Value, TranscodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            if let Some(parsed) = parse_line(self.line_num, &line) {
                return Some(parsed);
            }
        }
    }
}
