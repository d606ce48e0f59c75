//! Text encoding for the fixed-width and delimited sides
//!
//! Encoding labels follow the WHATWG Encoding Standard (`utf-8`,
//! `windows-1252`, `latin1`, `shift_jis`, ...), resolved through
//! `encoding_rs`. Decoding is strict: malformed input is an error rather than
//! being replaced with U+FFFD. Encoding is strict in the same way: characters
//! the target encoding cannot represent are an error.

use crate::types::TranscodeError;
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::path::Path;

/// A resolved text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    /// Resolve an encoding label
    ///
    /// # Errors
    ///
    /// Returns `TranscodeError::UnknownEncoding` if the label is not known.
    pub fn for_label(label: &str) -> Result<Self, TranscodeError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(|encoding| TextCodec { encoding })
            .ok_or_else(|| TranscodeError::unknown_encoding(label))
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode the raw contents of a file; `path` is only used for the error
    ///
    /// A byte order mark matching this encoding is dropped.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<String, TranscodeError> {
        let bytes = match Encoding::for_bom(bytes) {
            Some((encoding, bom_len)) if encoding == self.encoding => &bytes[bom_len..],
            _ => bytes,
        };

        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
            .ok_or_else(|| TranscodeError::decode(path, self.name()))
    }

    /// Encode text for writing
    ///
    /// UTF-16 and the replacement encoding can be decoded but not produced.
    pub fn encode<'a>(&self, text: &'a str) -> Result<Cow<'a, [u8]>, TranscodeError> {
        if self.encoding.output_encoding() != self.encoding {
            return Err(TranscodeError::unsupported_output_encoding(self.name()));
        }

        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(TranscodeError::encode(self.name()));
        }
        Ok(bytes)
    }
}
