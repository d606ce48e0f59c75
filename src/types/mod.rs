//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `spec`: Column specification and spec-file loading
//! - `error`: Error types for the transcoder

pub mod error;
pub mod spec;

pub use error::TranscodeError;
pub use spec::Spec;

/// One parsed row: a field per column, in column order
pub type Record = Vec<String>;
