//! CSV reader with iterator interface
//!
//! Provides a streaming iterator over calculation request records from a CSV
//! file. Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! RequestReader implements the Iterator trait, yielding
//! `Result<CsvRecord, InputError>` for each CSV row:
//!
//! ```no_run
//! use teller::io::reader::RequestReader;
//! use std::path::Path;
//!
//! let reader = RequestReader::new(Path::new("requests.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Request: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Malformed rows are yielded as `InputError::Parse` with a line number

use crate::io::csv_format::CsvRecord;
use crate::types::InputError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Streaming CSV reader for calculation requests
pub struct RequestReader<R: Read = File> {
    reader: csv::Reader<R>,
}

impl RequestReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Require every row to have the header's field count
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, `Io` for any other
    /// failure to open it.
    pub fn new(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InputError::file_not_found(&path.display().to_string()),
            _ => InputError::from(e),
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> RequestReader<R> {
    /// Wrap any reader producing CSV text
    pub fn from_reader(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(false)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        Self { reader }
    }
}

impl<R: Read> Iterator for RequestReader<R> {
    type Item = Result<CsvRecord, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();
        Some(deserializer.next()?.map_err(InputError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_reader_new_opens_file() {
        let file = create_temp_csv("a,b,action\n10,5,+\n");
        assert!(RequestReader::new(file.path()).is_ok());
    }

    #[test]
    fn test_reader_new_fails_on_missing_file() {
        let result = RequestReader::new(Path::new("nonexistent.csv"));
        assert_eq!(
            result.err(),
            Some(InputError::file_not_found("nonexistent.csv"))
        );
    }

    #[test]
    fn test_reader_iterates_records() {
        let file = create_temp_csv("a,b,action\n10,5,+\n'10',5,+\n10,5,invalid action\n");

        let records: Vec<_> = RequestReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].a, "'10'");
        assert_eq!(records[2].action, "invalid action");
    }

    #[test]
    fn test_reader_trims_whitespace() {
        let reader = RequestReader::from_reader("a,b,action\n  10 ,  5  , ^ \n".as_bytes());
        let records: Vec<_> = reader.collect();

        let record = records[0].as_ref().unwrap();
        assert_eq!(record.a, "10");
        assert_eq!(record.b, "5");
        assert_eq!(record.action, "^");
    }

    #[test]
    fn test_reader_reports_line_of_malformed_row() {
        let reader = RequestReader::from_reader("a,b,action\n10,5,+\n10,5\n2,3,*\n".as_bytes());
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(InputError::Parse { line: Some(3), .. })
        ));
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_reader_message_names_line_once() {
        let reader = RequestReader::from_reader("a,b,action\n10,5\n".as_bytes());
        let error = reader.into_iter().next().unwrap().unwrap_err();

        assert_eq!(
            error,
            InputError::Parse {
                line: Some(2),
                message: "found record with 2 fields, expected 3".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "CSV parse error at line 2: found record with 2 fields, expected 3"
        );
    }

    #[test]
    fn test_reader_reports_invalid_utf8_without_repeating_prefix() {
        let input: &[u8] = b"a,b,action\n\xff,5,+\n";
        let error = RequestReader::from_reader(input).next().unwrap().unwrap_err();

        let message = error.to_string();
        assert!(message.starts_with("CSV parse error at line 2: invalid utf-8"));
        assert_eq!(message.matches("CSV parse error").count(), 1);
        assert_eq!(message.matches("line").count(), 1);
    }

    #[test]
    fn test_reader_handles_empty_file_after_header() {
        let reader = RequestReader::from_reader("a,b,action\n".as_bytes());
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_reader_keeps_quoted_commas() {
        let reader = RequestReader::from_reader("a,b,action\n\"1,0\",2,+\n".as_bytes());
        let records: Vec<_> = reader.filter_map(Result::ok).collect();

        assert_eq!(records[0].a, "1,0");
    }
}
