//! Fixed-width line layout
//!
//! Pure functions for laying fields out into fixed-width slots and slicing
//! lines back into fields. All widths and offsets are counted in characters
//! of the decoded text, never in bytes, so multi-byte encodings slice
//! correctly once decoded.

use crate::types::Record;
use std::ops::Range;

/// Classification of one data line of a fixed-width file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty once trailing whitespace is removed; skipped
    Blank,
    /// Non-blank but narrower than the total width
    Short,
    /// At least the total width; holds exactly the first `total_width` characters
    Data(&'a str),
}

/// Left-justify `value` in a slot of exactly `width` characters
///
/// Longer values are truncated, shorter ones padded with spaces.
pub fn pad_field(value: &str, width: usize) -> String {
    format!("{value:<width$.width$}")
}

/// Concatenate fields into one fixed-width line (without terminator)
pub fn layout_line<S: AsRef<str>>(fields: &[S], widths: &[usize]) -> String {
    let capacity = widths.iter().sum();
    fields
        .iter()
        .zip(widths)
        .fold(String::with_capacity(capacity), |mut line, (field, &width)| {
            line.push_str(&pad_field(field.as_ref(), width));
            line
        })
}

/// Classify a line against the expected total width
///
/// Trailing whitespace is ignored when measuring, so a line whose last
/// field is entirely blank counts as short.
pub fn classify_line(line: &str, total_width: usize) -> LineKind<'_> {
    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed.chars().count() < total_width {
        return LineKind::Short;
    }

    LineKind::Data(truncate_chars(line, total_width))
}

/// First `count` characters of `line`
pub fn truncate_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((byte_index, _)) => &line[..byte_index],
        None => line,
    }
}

/// Slice a line into fields by character ranges, trimming each field
///
/// Ranges that run past the end of the line yield whatever characters exist.
pub fn slice_fields(line: &str, ranges: &[Range<usize>]) -> Record {
    let chars: Vec<char> = line.chars().collect();
    ranges
        .iter()
        .map(|range| {
            let start = range.start.min(chars.len());
            let end = range.end.min(chars.len());
            chars[start..end].iter().collect::<String>().trim().to_string()
        })
        .collect()
}
