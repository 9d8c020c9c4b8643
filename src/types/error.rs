//! Error types for teller
//!
//! This module defines the errors raised by account operations and by the
//! CSV front end. The arithmetic dispatcher has no error type: invalid
//! requests yield `None` instead.
//!
//! # Error Categories
//!
//! - **Account Errors**: Insufficient funds, self-transfer, failed synchronization
//! - **Input Errors**: File not found, I/O failures, malformed CSV

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by [`crate::core::Account`] operations
///
/// Every failing operation leaves all balances involved unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Requested amount exceeds the available balance
    ///
    /// Raised by withdrawals and transfers.
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds {
        /// Requested amount
        requested: Decimal,
        /// Balance at the time of the request
        available: Decimal,
    },

    /// Transfer target is the source account itself
    ///
    /// Reported even when the balance would cover the amount.
    #[error("Transfer failed: source and target are the same account")]
    TransferFailed,

    /// The remote balance lookup returned no value
    #[error("Synchronization failed: balance source returned no value")]
    SynchronizationFailed,

    /// Amount is zero or negative
    #[error("Invalid amount {amount}: must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },
}

impl AccountError {
    /// Create an InsufficientFunds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        AccountError::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        AccountError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        AccountError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Amount missing from the balance, if this is an InsufficientFunds error
    pub fn shortfall(&self) -> Option<Decimal> {
        match self {
            AccountError::InsufficientFunds {
                requested,
                available,
            } => Some(*requested - *available),
            _ => None,
        }
    }
}

/// Errors raised while reading calculation requests or writing results
///
/// FileNotFound and Io are fatal. Parse errors are per row: the row is
/// skipped and processing continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        InputError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for InputError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        let message = match error.kind() {
            csv::ErrorKind::Io(err) => {
                return InputError::Io {
                    message: err.to_string(),
                }
            }
            csv::ErrorKind::Utf8 { err, .. } => err.to_string(),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("found record with {} fields, expected {}", len, expected_len),
            csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
            _ => error.to_string(),
        };

        InputError::Parse { line, message }
    }
}

impl InputError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        InputError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Whether processing can continue past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, InputError::Parse { .. })
    }
}
