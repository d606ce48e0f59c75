//! Error types for the fixed-width transcoder
//!
//! This module defines all error types that can occur while loading a spec,
//! generating fixed-width data, or converting it to delimited output.
//!
//! # Error Categories
//!
//! - **Spec Errors**: missing keys, mismatched column/offset lists, bad widths
//! - **Input Errors**: empty input file, data line shorter than the spec width
//! - **Encoding Errors**: unknown labels, undecodable input, unencodable output
//! - **File I/O Errors**: file not found, permission denied, etc.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the transcoder
///
/// Every failure is fatal to the operation that raised it. The only
/// malformed input that is tolerated (blank data lines) never produces
/// an error at all.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The spec is malformed or incomplete
    ///
    /// Raised while loading the spec, before any data file is touched.
    #[error("Invalid spec: {message}")]
    Config {
        /// Description of what is wrong with the spec
        message: String,
    },

    /// The fixed-width input file contains no lines
    ///
    /// No output file is produced.
    #[error("The input file {} is empty.", path.display())]
    EmptyFile {
        /// The input path that was empty
        path: PathBuf,
    },

    /// A non-blank data line is narrower than the sum of the column widths
    ///
    /// Aborts the parse. Line numbers are 1-based and count the header line.
    #[error("Line {line} is shorter than expected width of {expected} characters")]
    ShortLine {
        /// Line number in the input file
        line: usize,
        /// Expected total width in characters
        expected: usize,
    },

    /// Encoding label not recognised
    #[error("Unknown encoding '{label}'")]
    UnknownEncoding {
        /// The label as it appeared in the spec
        label: String,
    },

    /// Encoding is known but cannot be produced as output
    #[error("Encoding '{encoding}' is not supported for writing")]
    UnsupportedOutputEncoding {
        /// Canonical encoding name
        encoding: String,
    },

    /// Input bytes are not valid in the configured encoding
    #[error("File {} is not valid {encoding}", path.display())]
    Decode {
        /// File that failed to decode
        path: PathBuf,
        /// Canonical encoding name
        encoding: String,
    },

    /// Output text contains characters the target encoding cannot represent
    #[error("Text is not representable in {encoding}")]
    Encode {
        /// Canonical encoding name
        encoding: String,
    },

    /// Delimited writer failure
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying file system error, passed through unchanged
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The logging backend could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging {
        /// Description of the failure
        message: String,
    },
}

// Helper functions for creating common errors

impl TranscodeError {
    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        TranscodeError::Config {
            message: message.into(),
        }
    }

    /// Create an EmptyFile error
    pub fn empty_file(path: &Path) -> Self {
        TranscodeError::EmptyFile {
            path: path.to_path_buf(),
        }
    }

    /// Create a ShortLine error
    pub fn short_line(line: usize, expected: usize) -> Self {
        TranscodeError::ShortLine { line, expected }
    }

    /// Create an UnknownEncoding error
    pub fn unknown_encoding(label: &str) -> Self {
        TranscodeError::UnknownEncoding {
            label: label.to_string(),
        }
    }

    /// Create an UnsupportedOutputEncoding error
    pub fn unsupported_output_encoding(encoding: &str) -> Self {
        TranscodeError::UnsupportedOutputEncoding {
            encoding: encoding.to_string(),
        }
    }

    /// Create a Decode error
    pub fn decode(path: &Path, encoding: &str) -> Self {
        TranscodeError::Decode {
            path: path.to_path_buf(),
            encoding: encoding.to_string(),
        }
    }

    /// Create an Encode error
    pub fn encode(encoding: &str) -> Self {
        TranscodeError::Encode {
            encoding: encoding.to_string(),
        }
    }

    /// Create a Logging error
    pub fn logging(message: impl Into<String>) -> Self {
        TranscodeError::Logging {
            message: message.into(),
        }
    }

    /// Whether this error was caused by bad spec or bad input data
    ///
    /// The CLI reports these as ordinary errors; anything else is treated
    /// as unexpected.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            TranscodeError::Config { .. }
                | TranscodeError::EmptyFile { .. }
                | TranscodeError::ShortLine { .. }
        )
    }
}
