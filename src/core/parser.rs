//! Fixed-width to delimited conversion
//!
//! # Line handling
//!
//! The whole input is read and decoded with the spec's fixed-width encoding
//! before any slicing, so widths are always counted in characters. Then:
//!
//! 1. An input with no lines fails with `EmptyFile`; no output is created.
//! 2. With a header, the column names become the first output row and the
//!    first input line is skipped without being checked.
//! 3. Each remaining line is classified (see [`classify_line`]):
//!    - blank lines are skipped and reported to the observer,
//!    - short lines abort the parse with `ShortLine`,
//!    - data lines are truncated to the total width, sliced, trimmed and
//!      written as one row.
//!
//! # Partial output
//!
//! With [`WriteMode::Streaming`] rows are written as they are parsed, so rows
//! preceding a `ShortLine` failure stay in the output file. With
//! [`WriteMode::Atomic`] the output is built in memory and only written once
//! the whole input parsed cleanly; a failed parse leaves no output file.

use crate::cli::WriteMode;
use crate::core::transcoder::Transcoder;
use crate::io::{classify_line, slice_fields, DelimitedWriter, LineKind, TextCodec};
use crate::types::TranscodeError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Outcome of a successful parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Data rows written (the header row is not counted)
    pub data_rows: usize,
    /// Blank input lines that were skipped
    pub blank_lines: usize,
}

impl Transcoder<'_> {
    /// Convert the fixed-width file at `input` into a CSV file at `output`
    ///
    /// # Errors
    ///
    /// - `EmptyFile` if the input has no lines
    /// - `ShortLine` for the first non-blank line narrower than the spec
    /// - encoding errors for unknown labels, undecodable input or
    ///   unencodable output
    /// - I/O errors, unchanged
    pub fn parse(&self, input: &Path, output: &Path) -> Result<ParseReport, TranscodeError> {
        let fixed = TextCodec::for_label(self.spec.fixed_encoding())?;
        let delimited = TextCodec::for_label(self.spec.delimited_encoding())?;

        let text = fixed.decode(&fs::read(input)?, input)?;
        let lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            return Err(TranscodeError::empty_file(input));
        }

        let report = match self.write_mode {
            WriteMode::Streaming => {
                let file = BufWriter::new(File::create(output)?);
                let mut writer = DelimitedWriter::new(file, delimited);
                let parsed = self.transcode_lines(&lines, input, output, &mut writer);
                // Rows written before a failure are kept
                let flushed = writer.finish();
                let report = parsed?;
                flushed?;
                report
            }
            WriteMode::Atomic => {
                let mut writer = DelimitedWriter::new(Vec::new(), delimited);
                let report = self.transcode_lines(&lines, input, output, &mut writer)?;
                fs::write(output, writer.finish()?)?;
                report
            }
        };

        self.observer.parse_completed(output, &report);
        Ok(report)
    }

    fn transcode_lines<W: Write>(
        &self,
        lines: &[&str],
        input: &Path,
        output: &Path,
        writer: &mut DelimitedWriter<W>,
    ) -> Result<ParseReport, TranscodeError> {
        let total_width = self.spec.total_width();
        let mut report = ParseReport::default();
        let mut numbered = lines.iter().enumerate().map(|(index, line)| (index + 1, *line));

        if self.spec.include_header() {
            writer.write_record(self.spec.column_names())?;
            self.observer.header_written(output);
            numbered.next();
        }

        for (line_number, line) in numbered {
            match classify_line(line, total_width) {
                LineKind::Blank => {
                    report.blank_lines += 1;
                    self.observer.blank_line_skipped(input, line_number);
                }
                LineKind::Short => {
                    return Err(TranscodeError::short_line(line_number, total_width));
                }
                LineKind::Data(data) => {
                    let record = slice_fields(data, self.spec.field_ranges());
                    writer.write_record(record.as_slice())?;
                    report.data_rows += 1;
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::observer::testing::{Event, RecordingObserver};
    use crate::core::observer::NoopObserver;
    use crate::types::Spec;
    use rstest::rstest;
    use tempfile::TempDir;

    const WIDTHS: [usize; 10] = [5, 12, 3, 2, 13, 7, 10, 13, 20, 13];

    fn ten_column_spec(include_header: bool) -> Spec {
        let names = (1..=10).map(|i| format!("f{}", i)).collect();
        Spec::new(names, WIDTHS.to_vec(), "windows-1252", "utf-8", include_header).unwrap()
    }

    fn two_column_spec(include_header: bool) -> Spec {
        Spec::new(
            vec!["f1".into(), "f2".into()],
            vec![3, 4],
            "utf-8",
            "utf-8",
            include_header,
        )
        .unwrap()
    }

    fn header_line(spec: &Spec) -> String {
        crate::io::layout_line(spec.column_names(), spec.widths())
    }

    /// Write `content` as the input file and return (dir, input, output)
    fn setup(content: &[u8]) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.csv");
        fs::write(&input, content).expect("Failed to write input");
        (dir, input, output)
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .expect("Failed to open output")
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_parse_two_column_line() {
        let spec = two_column_spec(false);
        let (_dir, input, output) = setup(b"abcwxyz \n");

        let report = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(report.data_rows, 1);
        assert_eq!(read_rows(&output), vec![vec!["abc", "wxyz"]]);
    }

    #[test]
    fn test_parse_trims_each_field() {
        let spec = two_column_spec(true);
        let (_dir, input, output) = setup(b"f1 f2  \n a   b1\nxyz1234\n");

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "f1,f2\r\na,b1\r\nxyz,1234\r\n"
        );
    }

    #[rstest]
    #[case::streaming(WriteMode::Streaming)]
    #[case::atomic(WriteMode::Atomic)]
    fn test_rows_end_with_crlf(#[case] mode: WriteMode) {
        let spec = two_column_spec(true);
        let (_dir, input, output) = setup(b"f1 f2  \nabcwxyz\n");

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .with_write_mode(mode)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"f1,f2\r\nabc,wxyz\r\n");
    }

    #[rstest]
    #[case::streaming(WriteMode::Streaming)]
    #[case::atomic(WriteMode::Atomic)]
    fn test_empty_file(#[case] mode: WriteMode) {
        let spec = ten_column_spec(true);
        let (_dir, input, output) = setup(b"");

        let error = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .with_write_mode(mode)
            .parse(&input, &output)
            .unwrap_err();

        assert!(matches!(error, TranscodeError::EmptyFile { .. }));
        assert!(error.to_string().contains(&input.display().to_string()));
        assert!(error.to_string().contains("is empty"));
        assert!(!output.exists());
    }

    #[test]
    fn test_short_line() {
        let spec = ten_column_spec(true);
        let content = format!("{}\nShort\n", header_line(&spec));
        let (_dir, input, output) = setup(content.as_bytes());

        let error = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap_err();

        assert!(matches!(
            error,
            TranscodeError::ShortLine {
                line: 2,
                expected: 98
            }
        ));
        assert!(error.to_string().contains("shorter than expected width"));
    }

    #[test]
    fn test_extra_characters_are_discarded() {
        let spec = ten_column_spec(true);
        let content = format!("{}\n{}ExtraData\n", header_line(&spec), "A".repeat(98));
        let (_dir, input, output) = setup(content.as_bytes());

        let report = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();
        assert_eq!(report.data_rows, 1);

        let rows = read_rows(&output);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], spec.column_names());
        assert_eq!(rows[1].len(), 10);
        assert_eq!(rows[1][9], "A".repeat(13));
    }

    #[test]
    fn test_blank_lines_are_skipped_and_reported() {
        let spec = ten_column_spec(true);
        let content = format!(
            "{}\n{}\n\n{}\n",
            header_line(&spec),
            "A".repeat(98),
            "B".repeat(98)
        );
        let (_dir, input, output) = setup(content.as_bytes());
        let observer = RecordingObserver::default();

        let report = Transcoder::new(&spec)
            .with_observer(&observer)
            .parse(&input, &output)
            .unwrap();

        let expected = ParseReport {
            data_rows: 2,
            blank_lines: 1,
        };
        assert_eq!(report, expected);
        assert_eq!(read_rows(&output).len(), 3);
        assert_eq!(
            observer.events(),
            vec![
                Event::HeaderWritten(output.clone()),
                Event::BlankLineSkipped(3),
                Event::ParseCompleted(expected),
            ]
        );
    }

    #[test]
    fn test_header_line_is_not_validated() {
        let spec = two_column_spec(true);
        let (_dir, input, output) = setup(b"x\nabcdefg\n");

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "f1,f2\r\nabc,defg\r\n");
    }

    #[test]
    fn test_without_header_first_line_is_data() {
        let spec = two_column_spec(false);
        let (_dir, input, output) = setup(b"abcdefg\nhijklmn\n");

        let report = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(report.data_rows, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "abc,defg\r\nhij,klmn\r\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let spec = two_column_spec(false);
        let (_dir, input, output) = setup(b"abcdefg\r\nhijklmn\r\n");

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "abc,defg\r\nhij,klmn\r\n");
    }

    #[test]
    fn test_widths_count_decoded_characters() {
        // Each 'é' is one byte in windows-1252 and two bytes in the UTF-8 output
        let spec = Spec::new(
            vec!["a".into(), "b".into()],
            vec![2, 3],
            "windows-1252",
            "utf-8",
            false,
        )
        .unwrap();
        let (_dir, input, output) = setup(b"\xe9\xe9\xe9ab\n");

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "éé,éab\r\n");
    }

    #[test]
    fn test_multibyte_utf8_input() {
        let spec = Spec::new(
            vec!["name".into(), "city".into()],
            vec![3, 5],
            "utf-8",
            "utf-8",
            false,
        )
        .unwrap();
        let (_dir, input, output) = setup("日本語Tōkyō\n".as_bytes());

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "日本語,Tōkyō\r\n");
    }

    #[test]
    fn test_output_uses_delimited_encoding() {
        let spec = Spec::new(vec!["a".into()], vec![4], "utf-8", "windows-1252", false).unwrap();
        let (_dir, input, output) = setup("café\n".as_bytes());

        Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"caf\xe9\r\n");
    }

    #[test]
    fn test_streaming_keeps_rows_before_short_line() {
        let spec = two_column_spec(true);
        let (_dir, input, output) = setup(b"f1 f2  \nabcdefg\nshort\nhijklmn\n");

        let error = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .with_write_mode(WriteMode::Streaming)
            .parse(&input, &output)
            .unwrap_err();

        assert!(matches!(error, TranscodeError::ShortLine { line: 3, .. }));
        assert_eq!(fs::read_to_string(&output).unwrap(), "f1,f2\r\nabc,defg\r\n");
    }

    #[test]
    fn test_atomic_writes_nothing_on_short_line() {
        let spec = two_column_spec(true);
        let (_dir, input, output) = setup(b"f1 f2  \nabcdefg\nshort\nhijklmn\n");

        let error = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .with_write_mode(WriteMode::Atomic)
            .parse(&input, &output)
            .unwrap_err();

        assert!(matches!(error, TranscodeError::ShortLine { line: 3, .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_atomic_output_matches_streaming() {
        let spec = two_column_spec(true);
        let content = b"f1 f2  \nabcdefg\n\nhijklmn\n";
        let (_dir, input, output) = setup(content);
        let atomic_output = input.with_file_name("atomic.csv");
        let transcoder = Transcoder::new(&spec).with_observer(&NoopObserver);

        transcoder.parse(&input, &output).unwrap();
        transcoder
            .with_write_mode(WriteMode::Atomic)
            .parse(&input, &atomic_output)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            fs::read_to_string(&atomic_output).unwrap()
        );
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let spec = two_column_spec(false);
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = dir.path().join("out.csv");

        let error = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&dir.path().join("missing.txt"), &output)
            .unwrap_err();

        assert!(matches!(
            &error,
            TranscodeError::Io(e) if e.kind() == std::io::ErrorKind::NotFound
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_undecodable_input() {
        let spec = two_column_spec(false);
        let (_dir, input, output) = setup(b"abc\xffdefg\n");

        let error = Transcoder::new(&spec)
            .with_observer(&NoopObserver)
            .parse(&input, &output)
            .unwrap_err();

        assert!(matches!(error, TranscodeError::Decode { .. }));
    }
}
