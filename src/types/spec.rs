//! Column specification for fixed-width files
//!
//! A [`Spec`] describes the column layout of a fixed-width file (names and
//! character widths, in column order), the encodings used on each side of
//! the conversion, and whether a header row is present. It is validated once
//! on construction and never mutated afterwards.
//!
//! # Spec File Format
//!
//! ```json
//! {
//!     "ColumnNames": ["f1", "f2"],
//!     "Offsets": ["5", "12"],
//!     "FixedWidthEncoding": "windows-1252",
//!     "IncludeHeader": "True",
//!     "DelimitedEncoding": "utf-8"
//! }
//! ```
//!
//! `Offsets` entries may be integers or integer strings. `IncludeHeader`
//! accepts a JSON boolean or a boolean-like string. Encoding labels are not
//! checked here; an unknown label only fails once a file is read or written.

use crate::types::TranscodeError;
use serde::Deserialize;
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Validated column specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    column_names: Vec<String>,
    widths: Vec<usize>,
    ranges: Vec<Range<usize>>,
    total_width: usize,
    fixed_encoding: String,
    delimited_encoding: String,
    include_header: bool,
}

impl Spec {
    /// Build a spec from already-parsed values
    ///
    /// # Errors
    ///
    /// Returns `TranscodeError::Config` if there are no columns, if the
    /// number of names and widths differ, if any width is zero, or if the
    /// widths add up to more than `usize::MAX`.
    pub fn new(
        column_names: Vec<String>,
        widths: Vec<usize>,
        fixed_encoding: impl Into<String>,
        delimited_encoding: impl Into<String>,
        include_header: bool,
    ) -> Result<Self, TranscodeError> {
        if column_names.is_empty() {
            return Err(TranscodeError::config("at least one column is required"));
        }
        if column_names.len() != widths.len() {
            return Err(TranscodeError::config(format!(
                "ColumnNames has {} entries but Offsets has {}",
                column_names.len(),
                widths.len()
            )));
        }
        if let Some(index) = widths.iter().position(|&width| width == 0) {
            return Err(TranscodeError::config(format!(
                "width of column '{}' must be positive",
                column_names[index]
            )));
        }

        let mut ranges = Vec::with_capacity(widths.len());
        let mut start: usize = 0;
        for &width in &widths {
            let end = start
                .checked_add(width)
                .ok_or_else(|| TranscodeError::config("total width overflows"))?;
            ranges.push(start..end);
            start = end;
        }

        Ok(Spec {
            column_names,
            widths,
            ranges,
            total_width: start,
            fixed_encoding: fixed_encoding.into(),
            delimited_encoding: delimited_encoding.into(),
            include_header,
        })
    }

    /// Load and validate a spec from a JSON file
    ///
    /// A spec file that cannot be read is reported as a configuration error
    /// naming the path.
    pub fn load(path: &Path) -> Result<Self, TranscodeError> {
        let text = fs::read_to_string(path).map_err(|e| {
            TranscodeError::config(format!(
                "failed to read spec file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a spec from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, TranscodeError> {
        let file: SpecFile =
            serde_json::from_str(text).map_err(|e| TranscodeError::config(e.to_string()))?;

        let widths = file
            .offsets
            .iter()
            .map(OffsetValue::to_width)
            .collect::<Result<Vec<_>, _>>()?;

        Spec::new(
            file.column_names,
            widths,
            file.fixed_width_encoding,
            file.delimited_encoding,
            file.include_header.to_bool()?,
        )
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Character range `[start, end)` occupied by each column, in order
    pub fn field_ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Sum of all column widths
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    pub fn fixed_encoding(&self) -> &str {
        &self.fixed_encoding
    }

    pub fn delimited_encoding(&self) -> &str {
        &self.delimited_encoding
    }

    pub fn include_header(&self) -> bool {
        self.include_header
    }
}

/// On-disk shape of a spec file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SpecFile {
    column_names: Vec<String>,
    offsets: Vec<OffsetValue>,
    fixed_width_encoding: String,
    delimited_encoding: String,
    include_header: FlagValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OffsetValue {
    Number(i64),
    Text(String),
}

impl OffsetValue {
    fn to_width(&self) -> Result<usize, TranscodeError> {
        let value = match self {
            OffsetValue::Number(n) => *n,
            OffsetValue::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                TranscodeError::config(format!("offset '{}' is not an integer", s))
            })?,
        };
        if value <= 0 {
            return Err(TranscodeError::config(format!(
                "offset {} must be positive",
                value
            )));
        }
        usize::try_from(value)
            .map_err(|_| TranscodeError::config(format!("offset {} is too large", value)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    fn to_bool(&self) -> Result<bool, TranscodeError> {
        match self {
            FlagValue::Bool(b) => Ok(*b),
            FlagValue::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(TranscodeError::config(format!(
                    "IncludeHeader value '{}' is not boolean-like",
                    s
                ))),
            },
        }
    }
}
