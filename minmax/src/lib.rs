//! Compare locked, partitioned, and shared-state reductions of parity-classified extrema.
//!
//! Every reduction consumes a sequence of `i32` once and produces an [Extrema]: the minimum
//! over values at even positions and the maximum over values at odd positions. The interesting
//! part is not the answer but how each strategy gets there:
//!
//! - [reduce::locked]: one thread, front to back, every store taken under a lock.
//! - [reduce::partitioned]: the even and odd partitions are scanned independently (and
//!   possibly concurrently) with no shared mutable state, then combined.
//! - [reduce::shared]: a parallel-for where every worker compares against a shared
//!   [Accumulator] and stores under a lock. Stores can be lost under contention.
//! - [reduce::folded]: per-worker partial results merged once at the end. Race-free and
//!   lock-free.
//!
//! Execution is driven by a [minmax_parallel::Strategy], so each reduction can be run on the
//! current thread or on a rayon pool.
//!
//! # Example
//!
//! ```
//! use minmax::{reduce, Extrema};
//! use minmax_parallel::Sequential;
//!
//! let values = [5, -3, 10, 2];
//! let expected = Extrema { min: 5, max: 2 };
//!
//! assert_eq!(reduce::locked(values.iter().copied()), expected);
//! assert_eq!(reduce::partitioned(&Sequential, &values).unwrap(), expected);
//! assert_eq!(reduce::shared(&Sequential, &values), expected);
//! ```

use thiserror::Error;

mod accumulator;
pub use accumulator::Accumulator;
mod extrema;
pub use extrema::Extrema;
mod parity;
pub use parity::Parity;
pub mod reduce;
pub use reduce::Reducer;
pub mod sequence;

/// Errors that can occur when generating or reducing a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no values at {0} positions")]
    EmptyPartition(Parity),
    #[error("invalid bounds: lower ({lower}) must be less than upper ({upper})")]
    InvalidBounds { lower: i32, upper: i32 },
    #[error("unknown reducer: {0}")]
    UnknownReducer(String),
}
