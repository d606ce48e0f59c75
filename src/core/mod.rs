//! Core transcoding module
//!
//! This module contains the transcoding components:
//! - `traits` - Observer abstraction the core reports progress through
//! - `observer` - `tracing`-backed and silent observers
//! - `transcoder` - The `Transcoder` bound to one spec
//! - `generator` - Synthetic fixed-width data (`Transcoder::generate`)
//! - `parser` - Fixed-width to delimited conversion (`Transcoder::parse`)

pub mod generator;
pub mod observer;
pub mod parser;
pub mod traits;
pub mod transcoder;

pub use generator::random_field;
pub use observer::{NoopObserver, TracingObserver};
pub use parser::ParseReport;
pub use traits::TranscodeObserver;
pub use transcoder::Transcoder;
