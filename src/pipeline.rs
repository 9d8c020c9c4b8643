//! Request processing pipeline
//!
//! Orchestrates evaluation of a CSV table of calculation requests by
//! coordinating the RequestReader (CSV input), the dispatcher and the
//! ResultWriter (CSV output).
//!
//! Rows are streamed one at a time; memory usage does not grow with the
//! input size.

use crate::core::calculator::evaluate;
use crate::io::csv_format::{convert_csv_record, ResultWriter};
use crate::io::reader::RequestReader;
use crate::types::InputError;
use std::io::{Read, Write};
use std::path::Path;

/// Output configuration for result tables
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OutputConfig {
    /// Text written in the `result` column when a request is invalid
    pub invalid_marker: String,
}

impl OutputConfig {
    /// Create an OutputConfig with a custom invalid-marker
    pub fn new(invalid_marker: impl Into<String>) -> Self {
        let invalid_marker = invalid_marker.into();

        if invalid_marker.contains(&['\n', '\r'][..]) {
            eprintln!("Warning: invalid-marker contains a line break, output rows will be quoted");
        }

        Self { invalid_marker }
    }
}

/// Counts collected while processing a request table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Rows that produced a numeric result
    pub evaluated: usize,
    /// Rows written with the invalid-marker
    pub invalid: usize,
    /// Malformed rows skipped without output
    pub skipped: usize,
}

/// Evaluate every request in `input_path` and write results to `output`
///
/// # Errors
///
/// Fatal errors (file not found, I/O errors) are returned immediately.
/// Malformed rows are reported to stderr and skipped.
pub fn process(
    input_path: &Path,
    output: &mut dyn Write,
    config: &OutputConfig,
) -> Result<ProcessSummary, InputError> {
    let reader = RequestReader::new(input_path)?;
    process_records(reader, output, config)
}

/// Evaluate every request yielded by `reader`
pub fn process_records<R: Read>(
    reader: RequestReader<R>,
    output: &mut dyn Write,
    config: &OutputConfig,
) -> Result<ProcessSummary, InputError> {
    let mut writer = ResultWriter::new(output, config)?;
    let mut summary = ProcessSummary::default();

    for result in reader {
        match result {
            Ok(record) => {
                let value = evaluate(&convert_csv_record(&record));
                if value.is_some() {
                    summary.evaluated += 1;
                } else {
                    summary.invalid += 1;
                }
                writer.write(&record, value)?;
            }
            Err(e) if e.is_recoverable() => {
                eprintln!("Warning: skipping row: {}", e);
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    writer.finish()?;
    Ok(summary)
}
