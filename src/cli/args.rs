use crate::logging::LoggingConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate fixed-width sample data and convert it to CSV
#[derive(Parser, Debug)]
#[command(name = "fixed-width-transcoder")]
#[command(about = "Generate fixed-width files and convert them to CSV", long_about = None)]
pub struct CliArgs {
    /// Spec file describing columns, widths, encodings and header presence
    #[arg(
        long = "spec",
        value_name = "PATH",
        default_value = "spec.json",
        help = "Path to the JSON spec file"
    )]
    pub spec: PathBuf,

    /// Fixed-width file that is generated and/or parsed
    #[arg(
        long = "fixed-width",
        value_name = "PATH",
        default_value = "fixed_width.txt",
        help = "Path of the fixed-width file"
    )]
    pub fixed_width: PathBuf,

    /// Delimited output file
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "output.csv",
        help = "Path of the CSV output file"
    )]
    pub output: PathBuf,

    /// Number of data rows to generate
    #[arg(
        long = "rows",
        value_name = "COUNT",
        default_value_t = 20,
        help = "Number of random data rows to generate"
    )]
    pub rows: usize,

    /// Which steps to run
    #[arg(
        long = "step",
        value_name = "STEP",
        default_value = "all",
        help = "Step to run: 'generate', 'parse', or 'all' (generate then parse)"
    )]
    pub step: Step,

    /// How parse output is written
    #[arg(
        long = "write-mode",
        value_name = "MODE",
        default_value = "streaming",
        help = "'streaming' keeps rows written before a failure, 'atomic' writes only on success"
    )]
    pub write_mode: WriteMode,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log file, in addition to stderr
    #[arg(long = "log-file", value_name = "PATH", default_value = "app.log")]
    pub log_file: PathBuf,

    /// Log to stderr only
    #[arg(long = "no-log-file")]
    pub no_log_file: bool,
}

/// Steps the CLI can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Step {
    Generate,
    Parse,
    All,
}

impl Step {
    pub fn generates(self) -> bool {
        matches!(self, Step::Generate | Step::All)
    }

    pub fn parses(self) -> bool {
        matches!(self, Step::Parse | Step::All)
    }
}

/// How parse output reaches the output file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WriteMode {
    /// Write rows as they are parsed; a failure leaves earlier rows on disk
    #[default]
    Streaming,
    /// Buffer all rows and write the file only after a successful parse
    Atomic,
}

impl CliArgs {
    /// Create a LoggingConfig from CLI arguments
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            file: (!self.no_log_file).then(|| self.log_file.clone()),
        }
    }
}
