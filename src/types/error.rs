//! Error types for the transcoder
//!
//! Every error aborts the run. There is no skip-and-continue path, so the
//! variants only need to say what went wrong and where.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: input not found, output not writable, etc.
//! - **Format Errors**: the input stream is structurally broken (ragged CSV
//!   row, a line that is not JSON)
//! - **Malformed Field Errors**: a structurally valid record carries a field
//!   whose content is wrong (embedded JSON, composite id, geometry)

use thiserror::Error;

/// Main error type for the transcoder
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranscodeError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading the input or writing the output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input stream does not conform to its structural format
    #[error("Format error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    FormatError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the format violation
        message: String,
    },

    /// A record field does not match its expected sub-format
    #[error("Malformed field '{field}'{}: {message}", record.map(|r| format!(" in record {}", r)).unwrap_or_default())]
    MalformedFieldError {
        /// 1-based record number, attached by the pipeline
        record: Option<u64>,
        /// Name of the offending field
        field: String,
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for TranscodeError {
    fn from(error: std::io::Error) -> Self {
        TranscodeError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TranscodeError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return TranscodeError::IoError {
                message: error.to_string(),
            };
        }
        TranscodeError::FormatError {
            line: error.position().map(|pos| pos.line()),
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for TranscodeError {
    fn from(error: csv_async::Error) -> Self {
        if error.is_io_error() {
            return TranscodeError::IoError {
                message: error.to_string(),
            };
        }
        TranscodeError::FormatError {
            line: error.position().map(|pos| pos.line()),
            message: error.to_string(),
        }
    }
}

impl TranscodeError {
    /// Create a FormatError for a given input line
    pub fn format(line: u64, message: impl Into<String>) -> Self {
        TranscodeError::FormatError {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a MalformedFieldError without record context
    pub fn malformed_field(field: &str, message: impl Into<String>) -> Self {
        TranscodeError::MalformedFieldError {
            record: None,
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Attach a record number to a MalformedFieldError
    ///
    /// Other variants already carry their own position and pass through.
    pub fn at_record(self, record_number: u64) -> Self {
        match self {
            TranscodeError::MalformedFieldError {
                record: None,
                field,
                message,
            } => TranscodeError::MalformedFieldError {
                record: Some(record_number),
                field,
                message,
            },
            other => other,
        }
    }

    /// Error for a missing input file
    pub fn file_not_found(path: &std::path::Path) -> Self {
        TranscodeError::FileNotFound {
            path: path.display().to_string(),
        }
    }

    /// Map an error opening `path` to FileNotFound or IoError
    pub fn open_failed(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::file_not_found(path)
        } else {
            TranscodeError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), error),
            }
        }
    }
}
