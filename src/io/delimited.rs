//! Delimited (CSV) output in an arbitrary text encoding
//!
//! `csv::Writer` only produces UTF-8, so one long-lived writer serializes
//! into an in-memory sink. After every record the writer is flushed and the
//! sink re-encodes the pending bytes with the configured codec before handing
//! them to the real output. A record that fails to encode never reaches it.

use crate::io::encoding::TextCodec;
use crate::types::TranscodeError;
use csv::{Terminator, WriterBuilder};
use std::io::{self, Write};

/// CSV writer that encodes each row before writing it out
pub struct DelimitedWriter<W: Write> {
    csv: csv::Writer<EncodingSink<W>>,
}

impl<W: Write> DelimitedWriter<W> {
    /// Create a writer with `\r\n` row terminators and minimal quoting
    pub fn new(output: W, codec: TextCodec) -> Self {
        let sink = EncodingSink {
            codec,
            pending: Vec::new(),
            output,
        };
        let csv = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .buffer_capacity(1024)
            .from_writer(sink);

        Self { csv }
    }

    /// Serialize, encode and write one record
    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<(), TranscodeError> {
        self.csv
            .write_record(fields.iter().map(AsRef::<str>::as_ref))?;
        self.csv.flush().map_err(sink_error)
    }

    /// Flush and hand back the underlying output
    pub fn finish(self) -> Result<W, TranscodeError> {
        let sink = self
            .csv
            .into_inner()
            .map_err(|e| sink_error(e.into_error()))?;
        Ok(sink.output)
    }
}

/// Collects serialized UTF-8 and writes it re-encoded on every flush
struct EncodingSink<W> {
    codec: TextCodec,
    pending: Vec<u8>,
    output: W,
}

impl<W: Write> EncodingSink<W> {
    fn write_pending(&mut self) -> Result<(), TranscodeError> {
        let text = std::str::from_utf8(&self.pending)
            .map_err(|_| TranscodeError::encode(self.codec.name()))?;
        let bytes = self.codec.encode(text)?;
        self.output.write_all(&bytes)?;
        Ok(())
    }
}

impl<W: Write> Write for EncodingSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let written = self.write_pending();
        self.pending.clear();
        written.map_err(|e| match e {
            TranscodeError::Io(io) => io,
            other => io::Error::other(other),
        })?;
        self.output.flush()
    }
}

/// Recover an encoding error that travelled through `csv` as an I/O error
fn sink_error(error: io::Error) -> TranscodeError {
    let wrapped = error
        .get_ref()
        .is_some_and(|inner| inner.is::<TranscodeError>());
    if !wrapped {
        return TranscodeError::Io(error);
    }

    let kind = error.kind();
    match error.into_inner().map(|inner| inner.downcast::<TranscodeError>()) {
        Some(Ok(inner)) => *inner,
        Some(Err(inner)) => TranscodeError::Io(io::Error::new(kind, inner)),
        None => TranscodeError::Io(kind.into()),
    }
}
