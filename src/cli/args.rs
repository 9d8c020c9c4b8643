use crate::pipeline::OutputConfig;
use clap::Parser;
use std::path::PathBuf;

/// Evaluate a CSV table of arithmetic requests
#[derive(Parser, Debug)]
#[command(name = "teller")]
#[command(about = "Evaluate a CSV table of arithmetic requests", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path with columns a, b, action
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Text written in the result column for invalid requests
    #[arg(
        long = "invalid-marker",
        value_name = "TEXT",
        help = "Result text for invalid requests (default: empty)"
    )]
    pub invalid_marker: Option<String>,
}

impl CliArgs {
    /// Create an OutputConfig from CLI arguments
    ///
    /// Falls back to `OutputConfig::default()` when no marker is given.
    pub fn to_output_config(&self) -> OutputConfig {
        match &self.invalid_marker {
            Some(marker) => OutputConfig::new(marker.as_str()),
            None => OutputConfig::default(),
        }
    }
}
