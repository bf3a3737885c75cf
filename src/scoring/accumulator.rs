//! Shared running totals
//!
//! Every per-record subtotal is folded into one shared `f64`. Both
//! implementations here make the read-modify-write race-free, so two
//! records finishing at the same time never lose a contribution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// A running total that many threads can fold into
pub trait Accumulator: Sync {
    /// Add `value` to the total
    fn fold(&self, value: f64);

    /// Current total
    fn total(&self) -> f64;
}

/// Lock-free `f64` built on the bit pattern stored in an `AtomicU64`
#[derive(Debug)]
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Create a new atomic holding `value`
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Add `value` with a compare-and-swap loop, returning the previous total
    pub fn fetch_add(&self, value: f64) -> f64 {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(previous) => return f64::from_bits(previous),
                Err(actual) => current = actual,
            }
        }
    }

    /// Current value
    pub fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Consume the atomic and return its value
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}

impl Default for AtomicF64 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Accumulator for AtomicF64 {
    fn fold(&self, value: f64) {
        self.fetch_add(value);
    }

    fn total(&self) -> f64 {
        self.load()
    }
}

/// Mutex-guarded `f64`
#[derive(Debug, Default)]
pub struct MutexF64 {
    value: Mutex<f64>,
}

impl MutexF64 {
    /// Create a new total holding `value`
    pub fn new(value: f64) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }
}

impl Accumulator for MutexF64 {
    fn fold(&self, value: f64) {
        // A plain f64 cannot be left half-written, so a poisoned lock is still usable
        let mut guard = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += value;
    }

    fn total(&self) -> f64 {
        *self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    fn hammer<A: Accumulator>(acc: &A, n: usize) {
        (0..n).into_par_iter().for_each(|_| acc.fold(1.0));
    }

    #[test]
    fn test_atomic_fetch_add_returns_previous() {
        let acc = AtomicF64::new(1.5);
        assert_eq!(acc.fetch_add(2.0), 1.5);
        assert_eq!(acc.load(), 3.5);
        assert_eq!(acc.into_inner(), 3.5);
    }

    #[test]
    fn test_atomic_no_lost_updates() {
        let acc = AtomicF64::default();
        hammer(&acc, 100_000);
        // Integers below 2^53 sum exactly in any order
        assert_eq!(acc.total(), 100_000.0);
    }

    #[test]
    fn test_mutex_no_lost_updates() {
        let acc = MutexF64::default();
        hammer(&acc, 100_000);
        assert_eq!(acc.total(), 100_000.0);
    }

    #[test]
    fn test_negative_values() {
        let acc = AtomicF64::new(0.0);
        acc.fold(2.0);
        acc.fold(-1.5);
        acc.fold(-0.5);
        assert_eq!(acc.total(), 0.0);

        let acc = MutexF64::new(10.0);
        acc.fold(-4.0);
        assert_eq!(acc.total(), 6.0);
    }
}
