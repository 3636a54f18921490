//! Pipeline context for a single run
//!
//! A [`Pipeline`] owns the mapper and the sink (and through it the output
//! handle) from the first record to the last. Records go through one at a
//! time: a record is mapped, written and flushed to the output handle before
//! the next one is accepted. The first error ends the run; whatever was
//! already written stays written.

use crate::core::traits::{RecordMapper, RecordSink};
use crate::types::TranscodeError;

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Records read, mapped and written (one output line each)
    pub records: u64,
}

/// Owns one mapper and one sink for the duration of a run
#[derive(Debug)]
pub struct Pipeline<M, S> {
    mapper: M,
    sink: S,
    records: u64,
}

impl<M, S> Pipeline<M, S>
where
    M: RecordMapper,
    S: RecordSink<M::Output>,
{
    pub fn new(mapper: M, sink: S) -> Self {
        Self {
            mapper,
            sink,
            records: 0,
        }
    }

    /// Map, write and flush one raw record
    ///
    /// Mapper errors are tagged with the 1-based record number.
    pub fn push(&mut self, raw: M::Input) -> Result<(), TranscodeError> {
        let record_number = self.records + 1;
        let output = self
            .mapper
            .map(raw)
            .map_err(|e| e.at_record(record_number))?;
        self.sink.write_record(&output)?;
        self.sink.flush()?;
        self.records = record_number;
        tracing::trace!(record = record_number, "record written");
        Ok(())
    }

    /// Drive a synchronous source to completion
    pub fn run<I>(mut self, source: I) -> Result<RunSummary, TranscodeError>
    where
        I: IntoIterator<Item = Result<M::Input, TranscodeError>>,
    {
        for raw in source {
            self.push(raw?)?;
        }
        self.finish()
    }

    /// Flush the sink and report how many records were written
    pub fn finish(mut self) -> Result<RunSummary, TranscodeError> {
        self.sink.flush()?;
        Ok(RunSummary {
            records: self.records,
        })
    }

    /// Records written so far
    pub fn records(&self) -> u64 {
        self.records
    }
}
