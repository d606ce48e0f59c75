//! Observer implementations
//!
//! - [`TracingObserver`] forwards every event to `tracing`; the CLI installs
//!   the subscriber that decides where those events end up.
//! - [`NoopObserver`] discards everything.

use crate::core::parser::ParseReport;
use crate::core::traits::TranscodeObserver;
use std::path::Path;
use tracing::{info, warn};

/// Reports transcoding events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TranscodeObserver for TracingObserver {
    fn header_written(&self, path: &Path) {
        info!(path = %path.display(), "Header written");
    }

    fn row_generated(&self, path: &Path, row: usize) {
        info!(path = %path.display(), row, "Row written to fixed-width file");
    }

    fn generate_completed(&self, path: &Path, rows: usize) {
        info!(path = %path.display(), rows, "Generated fixed-width file");
    }

    fn blank_line_skipped(&self, path: &Path, line: usize) {
        warn!(path = %path.display(), line, "Skipping empty line at line {}", line);
    }

    fn parse_completed(&self, output: &Path, report: &ParseReport) {
        info!(
            data_rows = report.data_rows,
            blank_lines = report.blank_lines,
            "Parsed fixed-width file and wrote to CSV: {}",
            output.display()
        );
    }
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TranscodeObserver for NoopObserver {}
