//! teller library
//!
//! # Overview
//!
//! Two standalone components with no shared state:
//!
//! - An arithmetic dispatcher mapping an operation tag and two operands to a
//!   result, or to `None` when the request is invalid
//! - A bank account holding one balance, with deposit, withdraw and transfer
//!   operations plus an asynchronous balance synchronization against a
//!   simulated, unreliable remote service
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Operation, Operand, errors)
//! - [`core`] - Business logic components:
//!   - [`core::calculator`] - Operation dispatch
//!   - [`core::account`] - Account state and balance operations
//!   - [`core::random`] - Injectable random sources
//! - [`io`] - CSV reading and result writing
//! - [`pipeline`] - Evaluation of a whole CSV request table
//! - [`cli`] - CLI arguments parsing
//!
//! # Operations
//!
//! | Tag | Operation |
//! |-----|-----------|
//! | `+` | Add |
//! | `-` | Subtract |
//! | `*` | Multiply |
//! | `/` | Divide |
//! | `^` | Exponentiate |

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{evaluate, Account, RandomSource, ThreadRandom};
pub use pipeline::{process, OutputConfig, ProcessSummary};
pub use types::{AccountError, CalculationRequest, InputError, Operand, Operation};
