//! Fixed-Width Transcoder CLI
//!
//! Generates a fixed-width sample file from a spec and converts it to CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --spec spec.json --rows 100
//! cargo run -- --step parse --fixed-width data.txt --output data.csv
//! cargo run -- --step parse --write-mode atomic --fixed-width data.txt
//! ```
//!
//! Progress is logged to stderr and to `app.log` (see `--log-file`,
//! `--no-log-file`, `--log-level` and `RUST_LOG`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (bad spec, empty or short input, file not found, etc.)

use fixed_width_transcoder::cli::{self, CliArgs};
use fixed_width_transcoder::{logging, Spec, TranscodeError, Transcoder};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = logging::init_logging(&args.to_logging_config()) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(&args) {
        if e.is_value_error() {
            error!("{}", e);
        } else {
            error!(critical = true, "An unexpected error occurred: {}", e);
        }
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), TranscodeError> {
    // The spec is loaded once and shared by both steps
    let spec = Spec::load(&args.spec)?;
    let transcoder = Transcoder::new(&spec).with_write_mode(args.write_mode);

    if args.step.generates() {
        info!("Starting fixed-width file generation.");
        transcoder.generate(&args.fixed_width, args.rows)?;
    }

    if args.step.parses() {
        info!("Starting fixed-width file parsing.");
        transcoder.parse(&args.fixed_width, &args.output)?;
    }

    info!("Processing completed successfully.");
    Ok(())
}
