//! A shared, lock-guarded [Extrema] written by concurrent workers.
//!
//! Reads never take the lock. Writes take it for exactly one store. Offering a value is
//! therefore a two-step check-then-act: a worker compares against a field it read without
//! synchronization, then acquires the lock and stores. Another worker may store a more extreme
//! value between those two steps, and the later store overwrites it (a lost update). The lock
//! only serializes the stores themselves.
//!
//! Fields are atomics loaded and stored with [Ordering::Relaxed]. This is what makes the
//! unguarded read well-defined; it adds no ordering beyond what the lock provides.

use crate::{Extrema, Parity};
use std::sync::{
    atomic::{AtomicI32, Ordering},
    Mutex, PoisonError,
};

/// The shared mutable result of a lock-based reduction.
#[derive(Debug)]
pub struct Accumulator {
    min: AtomicI32,
    max: AtomicI32,
    lock: Mutex<()>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// Creates an accumulator holding [Extrema::EMPTY].
    pub fn new() -> Self {
        Self {
            min: AtomicI32::new(Extrema::EMPTY.min),
            max: AtomicI32::new(Extrema::EMPTY.max),
            lock: Mutex::new(()),
        }
    }

    /// Returns the current minimum without synchronizing with writers.
    #[inline]
    pub fn min(&self) -> i32 {
        self.min.load(Ordering::Relaxed)
    }

    /// Returns the current maximum without synchronizing with writers.
    #[inline]
    pub fn max(&self) -> i32 {
        self.max.load(Ordering::Relaxed)
    }

    /// Offers `value`, found at `position`, to the field matching its class.
    ///
    /// The field is written only if `value` is strictly more extreme than the value read
    /// before the lock was taken. Under concurrent callers the store can replace a more extreme
    /// value that landed in between.
    #[inline]
    pub fn offer(&self, position: usize, value: i32) {
        match Parity::of(position) {
            Parity::Even => {
                if value < self.min() {
                    self.store(&self.min, value);
                }
            }
            Parity::Odd => {
                if value > self.max() {
                    self.store(&self.max, value);
                }
            }
        }
    }

    /// Consumes the accumulator and returns its final value.
    pub fn into_extrema(self) -> Extrema {
        Extrema {
            min: self.min.into_inner(),
            max: self.max.into_inner(),
        }
    }

    #[inline]
    fn store(&self, field: &AtomicI32, value: i32) {
        // The guarded state is `()`, so a panic elsewhere cannot leave it inconsistent.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        field.store(value, Ordering::Relaxed);
    }
}
