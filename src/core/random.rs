//! Random number sources for the simulated balance lookup
//!
//! [`crate::core::Account::fetch_balance`] draws from a [`RandomSource`]
//! instead of a process-wide generator, so tests can substitute a scripted
//! source and force both the candidate balance and the success flag.

use rand::Rng;

/// A source of uniformly distributed integers
pub trait RandomSource {
    /// Draw an integer uniformly from `lower..=upper`
    ///
    /// Implementations may assume `lower <= upper`.
    fn random(&self, lower: u32, upper: u32) -> u32;
}

/// Default source backed by the thread-local generator from `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random(&self, lower: u32, upper: u32) -> u32 {
        rand::thread_rng().gen_range(lower..=upper)
    }
}

/// Lets several accounts share one source
impl<R: RandomSource + ?Sized> RandomSource for std::rc::Rc<R> {
    fn random(&self, lower: u32, upper: u32) -> u32 {
        (**self).random(lower, upper)
    }
}
