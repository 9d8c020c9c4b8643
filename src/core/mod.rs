//! Core logic module
//!
//! This module contains the two independent components:
//! - `calculator` - Arithmetic dispatch over calculation requests
//! - `account` - Single-balance account with transfers and synchronization
//! - `random` - Injectable random sources used by the account

pub mod account;
pub mod calculator;
pub mod random;

pub use account::Account;
pub use calculator::evaluate;
pub use random::{RandomSource, ThreadRandom};
