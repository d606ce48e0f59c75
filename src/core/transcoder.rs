//! Transcoder bound to one spec
//!
//! A [`Transcoder`] borrows a validated [`Spec`] and an observer and exposes
//! the two operations of the crate:
//!
//! - [`Transcoder::generate`] writes synthetic fixed-width data (see `generator`)
//! - [`Transcoder::parse`] converts a fixed-width file to CSV (see `parser`)
//!
//! # Examples
//!
//! ```no_run
//! use fixed_width_transcoder::{Spec, Transcoder};
//! use std::path::Path;
//!
//! let spec = Spec::load(Path::new("spec.json")).unwrap();
//! let transcoder = Transcoder::new(&spec);
//!
//! transcoder.generate(Path::new("fixed_width.txt"), 20).unwrap();
//! transcoder.parse(Path::new("fixed_width.txt"), Path::new("output.csv")).unwrap();
//! ```

use crate::cli::WriteMode;
use crate::core::observer::TracingObserver;
use crate::core::traits::TranscodeObserver;
use crate::types::Spec;

/// Fixed-width/delimited transcoder for one spec
///
/// Holds only shared references, so it is cheap to copy and safe to use from
/// several threads on independent files.
#[derive(Clone, Copy)]
pub struct Transcoder<'a> {
    pub(crate) spec: &'a Spec,
    pub(crate) observer: &'a dyn TranscodeObserver,
    pub(crate) write_mode: WriteMode,
}

impl<'a> Transcoder<'a> {
    /// Create a transcoder that reports through `tracing` and streams output
    pub fn new(spec: &'a Spec) -> Self {
        Transcoder {
            spec,
            observer: &TracingObserver,
            write_mode: WriteMode::default(),
        }
    }

    /// Replace the observer that receives progress events
    pub fn with_observer(mut self, observer: &'a dyn TranscodeObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Choose how parse output is written
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

}

impl std::fmt::Debug for Transcoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcoder")
            .field("spec", self.spec)
            .field("write_mode", &self.write_mode)
            .finish_non_exhaustive()
    }
}
