//! Core traits for the pipeline stages
//!
//! A run is Source Reader → Record Mapper → Sink Writer. Sources are plain
//! iterators (sync) or [`AsyncRecordSource`] implementors (async); the two
//! traits below are shared by both execution strategies.

use crate::types::TranscodeError;
use std::future::Future;

/// Pure per-record transformation
///
/// Implementations hold no state that changes between records, so the
/// output for a record depends on that record alone.
pub trait RecordMapper {
    /// Raw record produced by the source
    type Input;

    /// Record handed to the sink
    type Output;

    /// Map one raw record to one output record
    fn map(&self, raw: Self::Input) -> Result<Self::Output, TranscodeError>;
}

/// Serializes output records, one line each, to an owned write handle
pub trait RecordSink<R> {
    /// Write one record followed by a newline
    fn write_record(&mut self, record: &R) -> Result<(), TranscodeError>;

    /// Push everything written so far to the underlying handle
    fn flush(&mut self) -> Result<(), TranscodeError>;
}

/// Lazy, finite, non-restartable sequence of raw records read asynchronously
pub trait AsyncRecordSource {
    type Record;

    /// Read the next record; `None` once the stream is exhausted
    fn next_record(
        &mut self,
    ) -> impl Future<Output = Option<Result<Self::Record, TranscodeError>>>;
}
