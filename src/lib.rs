//! Fixed-Width Transcoder Library
//! # Overview
//!
//! This library converts fixed-width positional text files into delimited
//! (CSV) files, driven by a column spec, and can generate synthetic
//! fixed-width files for the same spec.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Spec, Record, TranscodeError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Transcoding logic:
//!   - [`core::transcoder`] - The `Transcoder` bound to one spec
//!   - [`core::generator`] - Synthetic fixed-width data
//!   - [`core::parser`] - Fixed-width to CSV conversion
//!   - [`core::traits`] - Observer trait the core reports progress through
//! - [`io`] - Encodings, fixed-width layout and CSV output
//! - [`logging`] - `tracing` subscriber setup for the binary
//!
//! # Widths
//!
//! Column widths are counted in characters of the decoded text. The
//! fixed-width side is decoded with the spec's fixed-width encoding before
//! any slicing, and the CSV side is encoded with the spec's delimited
//! encoding on the way out.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use cli::WriteMode;
pub use crate::core::{NoopObserver, ParseReport, TracingObserver, TranscodeObserver, Transcoder};
pub use types::{Record, Spec, TranscodeError};
