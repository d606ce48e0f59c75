//! Synthetic fixed-width data
//!
//! Writes an optional header line (column names padded or truncated to their
//! widths) followed by data lines whose fields are random alphanumeric
//! strings exactly as wide as their column, so data lines never need padding.
//! Every line ends with `\n` and the file is encoded with the spec's
//! fixed-width encoding.

use crate::core::transcoder::Transcoder;
use crate::io::{layout_line, TextCodec};
use crate::types::TranscodeError;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl Transcoder<'_> {
    /// Overwrite `path` with a header line (if enabled) and `rows` random data lines
    ///
    /// # Errors
    ///
    /// Fails on file system errors, an unknown fixed-width encoding, or a
    /// column name that the encoding cannot represent.
    pub fn generate(&self, path: &Path, rows: usize) -> Result<(), TranscodeError> {
        self.generate_with_rng(path, rows, &mut rand::thread_rng())
    }

    /// [`generate`](Self::generate) with a caller-supplied random source
    pub fn generate_with_rng<R: Rng>(
        &self,
        path: &Path,
        rows: usize,
        rng: &mut R,
    ) -> Result<(), TranscodeError> {
        let codec = TextCodec::for_label(self.spec.fixed_encoding())?;
        let widths = self.spec.widths();
        let mut output = BufWriter::new(File::create(path)?);

        if self.spec.include_header() {
            let header = layout_line(self.spec.column_names(), widths);
            write_line(&mut output, codec, header)?;
            self.observer.header_written(path);
        }

        for row in 1..=rows {
            let fields: Vec<String> = widths.iter().map(|&w| random_field(rng, w)).collect();
            write_line(&mut output, codec, layout_line(&fields, widths))?;
            self.observer.row_generated(path, row);
        }

        output.flush()?;
        self.observer.generate_completed(path, rows);
        Ok(())
    }
}

/// Random string of `width` characters drawn from `[A-Za-z0-9]`
pub fn random_field<R: Rng>(rng: &mut R, width: usize) -> String {
    (0..width)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

fn write_line<W: Write>(
    output: &mut W,
    codec: TextCodec,
    mut line: String,
) -> Result<(), TranscodeError> {
    line.push('\n');
    output.write_all(&codec.encode(&line)?)?;
    Ok(())
}
