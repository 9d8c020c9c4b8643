//! CSV format handling for calculation requests and results
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to calculation requests
//! - Result serialization
//!
//! Conversion and formatting are pure; only `ResultWriter` performs I/O.

use crate::pipeline::OutputConfig;
use crate::types::{CalculationRequest, InputError, Operand};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: a, b, action.
/// Fields stay as text so the operand type can be decided per cell.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub a: String,
    pub b: String,
    pub action: String,
}

/// Convert a CsvRecord to a CalculationRequest
///
/// Each operand cell is classified with [`Operand::parse`]. The action is
/// kept verbatim; unrecognized tags are resolved by the dispatcher.
pub fn convert_csv_record(csv_record: &CsvRecord) -> CalculationRequest {
    CalculationRequest {
        a: Operand::parse(&csv_record.a),
        b: Operand::parse(&csv_record.b),
        action: csv_record.action.clone(),
    }
}

/// Render a dispatcher result as a CSV cell
///
/// `None` is written as the configured invalid-marker.
pub fn format_result(result: Option<f64>, config: &OutputConfig) -> String {
    match result {
        Some(value) => value.to_string(),
        None => config.invalid_marker.clone(),
    }
}

/// Streaming writer for result rows
///
/// Writes the header on creation, then one row per evaluated request with
/// columns: a, b, action, result.
pub struct ResultWriter<'a, W: Write> {
    writer: csv::Writer<W>,
    config: &'a OutputConfig,
}

impl<'a, W: Write> ResultWriter<'a, W> {
    /// Create a writer and emit the header row
    pub fn new(output: W, config: &'a OutputConfig) -> Result<Self, InputError> {
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(["a", "b", "action", "result"])?;

        Ok(Self { writer, config })
    }

    /// Write one result row, echoing the input fields
    pub fn write(&mut self, record: &CsvRecord, result: Option<f64>) -> Result<(), InputError> {
        self.writer.write_record([
            record.a.as_str(),
            record.b.as_str(),
            record.action.as_str(),
            format_result(result, self.config).as_str(),
        ])?;
        Ok(())
    }

    /// Flush buffered rows to the underlying writer
    pub fn finish(mut self) -> Result<(), InputError> {
        self.writer.flush()?;
        Ok(())
    }
}
