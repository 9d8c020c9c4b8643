//! End-to-end integration tests
//!
//! These tests validate the complete request evaluation pipeline using
//! predefined CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Evaluates every request through the pipeline
//! 3. Writes the result table to a temporary file
//! 4. Compares actual output with expected.csv
//!
//! Account behaviour has no file interface and is covered by the scenarios at
//! the bottom of this file.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::rc::Rc;
    use teller::{process, Account, AccountError, OutputConfig, RandomSource};
    use tempfile::NamedTempFile;

    /// Run a test fixture by processing input.csv and comparing with expected.csv
    ///
    /// # Panics
    ///
    /// Panics if input or expected files cannot be read, or if the output
    /// doesn't match.
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        process(
            Path::new(&input_path),
            &mut temp_output,
            &OutputConfig::default(),
        )
        .unwrap_or_else(|e| panic!("Failed to process requests: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("all_operations")]
    #[case("invalid_requests")]
    #[case("malformed_rows")]
    #[case("edge_values")]
    #[case("empty_table")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_custom_invalid_marker() {
        let mut output = Vec::new();

        let summary = process(
            Path::new("tests/fixtures/invalid_requests/input.csv"),
            &mut output,
            &OutputConfig::new("null"),
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("10,5,invalid action,null\n"));
        assert!(output.contains("10,5,add,15\n"));
        assert_eq!(summary.invalid, 4);
        assert_eq!(summary.evaluated, 1);
    }

    /// Always reports a successful lookup of the same balance
    struct FixedBalance(u32);

    impl RandomSource for FixedBalance {
        fn random(&self, lower: u32, upper: u32) -> u32 {
            if (lower, upper) == (0, 1) {
                1
            } else {
                self.0
            }
        }
    }

    #[tokio::test]
    async fn test_account_session() {
        let source = Rc::new(FixedBalance(42));
        let savings = Account::with_random_source(Decimal::from(100), Rc::clone(&source));
        let checking = Account::with_random_source(Decimal::ZERO, Rc::clone(&source));

        savings
            .deposit(Decimal::from(2000))
            .and_then(|a| a.withdraw(Decimal::from(100)))
            .and_then(|a| a.transfer(Decimal::from(500), &checking))
            .unwrap();
        assert_eq!(savings.balance(), Decimal::from(1500));
        assert_eq!(checking.balance(), Decimal::from(500));

        assert_eq!(
            savings.transfer(Decimal::from(1), &savings).unwrap_err(),
            AccountError::TransferFailed
        );

        savings.synchronize_balance().await.unwrap();
        assert_eq!(savings.balance(), Decimal::from(42));
        assert_eq!(checking.balance(), Decimal::from(500));

        checking.synchronize_balance().await.unwrap();
        assert_eq!(checking.balance(), Decimal::from(42));
        assert_eq!(Rc::strong_count(&source), 3);
    }
}
