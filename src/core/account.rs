//! Account module
//!
//! This module provides the `Account` struct which holds a single balance and
//! the operations that mutate it.
//!
//! The Account is responsible for:
//! - Deposits and withdrawals with sufficiency checks
//! - Transfers to another account, rejecting self-transfers
//! - Synchronizing the balance from a simulated, unreliable remote lookup
//!
//! # Ownership model
//!
//! The balance lives in a `Cell`, so every operation takes `&self`. A transfer
//! can therefore receive the source account itself as its target, and the
//! self-transfer check compares addresses. `Cell` makes `Account` `!Sync`: one
//! caller drives an account at a time.

use crate::core::random::{RandomSource, ThreadRandom};
use crate::types::AccountError;
use rust_decimal::Decimal;
use std::cell::Cell;
use std::fmt;

/// Inclusive range of balances the simulated remote lookup can return
pub const FETCH_BALANCE_RANGE: (u32, u32) = (0, 100);

/// A bank account holding a single balance
///
/// Every operation is all-or-nothing: on error no balance is modified.
pub struct Account<R = ThreadRandom> {
    /// Current balance, may be negative or fractional
    balance: Cell<Decimal>,

    /// Source of randomness for `fetch_balance`
    random: R,
}

impl Account<ThreadRandom> {
    /// Create an account with the given initial balance
    ///
    /// The balance is stored verbatim; negative values are accepted.
    pub fn new(initial_balance: Decimal) -> Self {
        Account::with_random_source(initial_balance, ThreadRandom)
    }
}

impl<R: RandomSource> Account<R> {
    /// Create an account that draws simulated lookups from `random`
    pub fn with_random_source(initial_balance: Decimal, random: R) -> Self {
        Account {
            balance: Cell::new(initial_balance),
            random,
        }
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance.get()
    }

    /// Deposit funds into the account
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to deposit (must be positive)
    ///
    /// # Returns
    ///
    /// * `Ok(&Self)` - The same account, for chaining
    /// * `Err(AccountError)` - If the amount is not positive or overflow would occur
    pub fn deposit(&self, amount: Decimal) -> Result<&Self, AccountError> {
        ensure_positive(amount)?;

        let new_balance = self
            .balance()
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("deposit"))?;

        self.balance.set(new_balance);
        Ok(self)
    }

    /// Withdraw funds from the account
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to withdraw (must be positive)
    ///
    /// # Returns
    ///
    /// * `Ok(&Self)` - The same account, for chaining
    /// * `Err(AccountError)` - If the amount is not positive or exceeds the balance
    pub fn withdraw(&self, amount: Decimal) -> Result<&Self, AccountError> {
        ensure_positive(amount)?;
        let new_balance = self.debited(amount, "withdrawal")?;

        self.balance.set(new_balance);
        Ok(self)
    }

    /// Move funds from this account to `target`
    ///
    /// The self-transfer check runs before any amount or balance check, so
    /// transferring to the same account always fails with `TransferFailed`.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to move (must be positive)
    /// * `target` - The receiving account
    ///
    /// # Returns
    ///
    /// * `Ok(&Self)` - The source account, for chaining
    /// * `Err(AccountError)` - Self-transfer, invalid amount, insufficient
    ///   funds, or overflow on the target
    pub fn transfer<T: RandomSource>(
        &self,
        amount: Decimal,
        target: &Account<T>,
    ) -> Result<&Self, AccountError> {
        if self.is_same_account(target) {
            return Err(AccountError::TransferFailed);
        }
        ensure_positive(amount)?;

        let new_source = self.debited(amount, "transfer")?;
        let new_target = target
            .balance()
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow("transfer"))?;

        self.balance.set(new_source);
        target.balance.set(new_target);
        Ok(self)
    }

    /// Query the simulated remote balance service
    ///
    /// Draws a candidate balance from [`FETCH_BALANCE_RANGE`], then a separate
    /// success flag from `0..=1` where `0` means the request failed. Yields to
    /// the scheduler once before resolving.
    ///
    /// # Returns
    ///
    /// `Some(balance)` on success, `None` when the simulated request failed
    pub async fn fetch_balance(&self) -> Option<Decimal> {
        let (lower, upper) = FETCH_BALANCE_RANGE;
        let candidate = self.random.random(lower, upper);
        let request_failed = self.random.random(0, 1) == 0;

        tokio::task::yield_now().await;

        if request_failed {
            None
        } else {
            Some(Decimal::from(candidate))
        }
    }

    /// Replace the balance with the value from [`Account::fetch_balance`]
    ///
    /// # Errors
    ///
    /// Returns `SynchronizationFailed` if the lookup returned nothing; the
    /// balance is left unchanged.
    pub async fn synchronize_balance(&self) -> Result<(), AccountError> {
        let balance = self
            .fetch_balance()
            .await
            .ok_or(AccountError::SynchronizationFailed)?;

        self.balance.set(balance);
        Ok(())
    }

    /// Whether `other` is this very account (by address, not by value)
    pub fn is_same_account<T>(&self, other: &Account<T>) -> bool {
        std::ptr::eq(&self.balance, &other.balance)
    }

    /// Balance after removing `amount`, or the reason it cannot be removed
    fn debited(&self, amount: Decimal, operation: &str) -> Result<Decimal, AccountError> {
        let available = self.balance();
        if amount > available {
            return Err(AccountError::insufficient_funds(amount, available));
        }

        available
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow(operation))
    }
}

impl<R> fmt::Debug for Account<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("balance", &self.balance.get())
            .finish_non_exhaustive()
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), AccountError> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::invalid_amount(amount));
    }
    Ok(())
}
