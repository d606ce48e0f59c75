//! Observer trait for transcoding progress
//!
//! The core never logs on its own. Everything worth reporting is handed to a
//! `TranscodeObserver` supplied by the caller, so the choice of logging
//! backend stays outside the transcoding logic.

use crate::core::parser::ParseReport;
use std::path::Path;

/// Receives progress events from a [`Transcoder`](crate::core::Transcoder)
///
/// All methods default to doing nothing.
pub trait TranscodeObserver: Send + Sync {
    /// A header row was written to `path`
    fn header_written(&self, _path: &Path) {}

    /// Data row `row` (1-based) was written to a generated fixed-width file
    fn row_generated(&self, _path: &Path, _row: usize) {}

    /// Generation of `rows` data rows into `path` finished
    fn generate_completed(&self, _path: &Path, _rows: usize) {}

    /// Input line `line` (1-based) of `path` was blank and skipped
    fn blank_line_skipped(&self, _path: &Path, _line: usize) {}

    /// Parsing finished and `output` holds the delimited result
    fn parse_completed(&self, _output: &Path, _report: &ParseReport) {}
}
