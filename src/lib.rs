//! Geo Transcode Library
//! # Overview
//!
//! Streaming, record-at-a-time converters between building CSV and
//! newline-delimited GeoJSON, with a reverse converter that emits
//! WKT-encoded CSV. Each input record becomes exactly one output line, in
//! input order.
//!
//! # Architecture
//!
//! ```text
//! Source Reader ──► Record Mapper ──► Sink Writer
//!  (io::*Source)     (core::*Mapper)    (io::sink)
//! ```
//!
//! - [`types`] - Raw records, output records and errors
//! - [`io`] - Source Readers (sync and async) and Sink Writers
//! - [`core`] - Mapper/sink traits, the mappers, the WKT writer and the
//!   per-run [`core::Pipeline`]
//! - [`strategy`] - Sync and async execution strategies
//! - [`cli`] - Argument parsing, logging and the binaries' entry point
//!
//! # Conversions
//!
//! - **CSV → GeoJSON**: `id,geometry,attributes` rows become Features with
//!   the id copied verbatim
//! - **CSV → GeoJSON (numeric id)**: as above, the id reduced to the integer
//!   sequence part of `<code>-<category>-<sequence>`
//! - **GeoJSON → CSV**: Features become `"<id>","<WKT>","<properties>"`
//!   rows, the building id property moved out of the properties
//!
//! # Errors
//!
//! The first error aborts the run. Output already written stays in place.

pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{FeatureMapper, IdMode, Pipeline, RunSummary, WktMapper};
pub use strategy::{create_strategy, Conversion, ProcessingStrategy};
pub use types::{
    CsvFeatureRow, FeatureId, FeatureLine, GeoJsonLine, TranscodeError, WktRow, BUILDING_ID_KEY,
};
