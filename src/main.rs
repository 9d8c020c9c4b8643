//! teller CLI
//!
//! Command-line interface for evaluating a CSV table of arithmetic requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- requests.csv > results.csv
//! cargo run -- --invalid-marker null requests.csv > results.csv
//! ```
//!
//! The input has columns `a,b,action`; the output repeats them and appends a
//! `result` column. Invalid requests get the invalid-marker (empty by
//! default). Malformed rows are reported on stderr and skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use std::process;
use teller::{cli, pipeline};

fn main() {
    let args = cli::parse_args();
    let config = args.to_output_config();

    let mut output = std::io::stdout().lock();
    if let Err(e) = pipeline::process(&args.input_file, &mut output, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
