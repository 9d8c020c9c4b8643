//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `calculation`: Operation tags, operands and calculation requests
//! - `error`: Error types for accounts and CSV input

pub mod calculation;
pub mod error;

pub use calculation::{CalculationRequest, Operand, Operation};
pub use error::{AccountError, InputError};
