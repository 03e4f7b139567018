//! Interchangeable reductions of a sequence into [Extrema].
//!
//! | Reducer | Workers | Shared state | Empty class | Exact under contention |
//! |---------|---------|--------------|-------------|------------------------|
//! | [locked] | 1 | [Accumulator](crate::Accumulator) | sentinel | yes (no contention) |
//! | [partitioned] | strategy | none | [Error::EmptyPartition] | yes |
//! | [shared] | strategy | [Accumulator](crate::Accumulator) | sentinel | no |
//! | [folded] | strategy | none | sentinel | yes |

use crate::{Error, Extrema};
use minmax_parallel::Strategy;
use std::{fmt, str::FromStr};

mod folded;
pub use folded::folded;
mod locked;
pub use locked::locked;
mod partitioned;
pub use partitioned::partitioned;
mod shared;
pub use shared::shared;

/// Names a reduction so callers can select one at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reducer {
    /// [locked]: one thread, every store under a lock.
    Locked,
    /// [partitioned]: independent even and odd scans joined at the end.
    Partitioned,
    /// [shared]: parallel-for over a shared accumulator (best-effort).
    Shared,
    /// [folded]: per-worker partial results merged once.
    Folded,
}

impl Reducer {
    /// Every reducer, in the order they are usually compared.
    pub const ALL: [Self; 4] = [Self::Locked, Self::Partitioned, Self::Shared, Self::Folded];

    /// Returns the name that [FromStr] parses back into this reducer.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Partitioned => "partitioned",
            Self::Shared => "shared",
            Self::Folded => "folded",
        }
    }

    /// Runs the reduction over `values`.
    ///
    /// [Reducer::Locked] always runs on the calling thread and ignores `strategy`.
    pub fn run<S: Strategy>(&self, strategy: &S, values: &[i32]) -> Result<Extrema, Error> {
        match self {
            Self::Locked => Ok(locked(values.iter().copied())),
            Self::Partitioned => partitioned(strategy, values),
            Self::Shared => Ok(shared(strategy, values)),
            Self::Folded => Ok(folded(strategy, values)),
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Reducer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reducer| reducer.name() == s)
            .ok_or_else(|| Error::UnknownReducer(s.to_string()))
    }
}
