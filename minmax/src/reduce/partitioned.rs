use crate::{Error, Extrema, Parity};
use minmax_parallel::Strategy;
use tracing::{debug, warn};

/// Reduces the even and odd partitions of `values` independently, then combines them.
///
/// The two scans run under [Strategy::join] and each folds into its own scalar, so no state is
/// shared between them and no lock is needed. The result is deterministic for any strategy.
///
/// # Errors
///
/// Returns [Error::EmptyPartition] if either partition has no elements (the even partition is
/// reported first). An empty input therefore fails with [Parity::Even] and a single-element
/// input with [Parity::Odd].
pub fn partitioned<S: Strategy>(strategy: &S, values: &[i32]) -> Result<Extrema, Error> {
    let (min, max) = strategy.join(
        || extremum(strategy, values, Parity::Even, i32::min),
        || extremum(strategy, values, Parity::Odd, i32::max),
    );
    let (min, max) = match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (None, _) => return Err(empty(values.len(), Parity::Even)),
        (_, None) => return Err(empty(values.len(), Parity::Odd)),
    };
    let extrema = Extrema { min, max };
    debug!(
        len = values.len(),
        parallelism = strategy.parallelism(),
        min,
        max,
        "partitioned reduction complete"
    );
    Ok(extrema)
}

/// Selects among the values at positions of `class` with `pick`.
fn extremum<S: Strategy>(
    strategy: &S,
    values: &[i32],
    class: Parity,
    pick: fn(i32, i32) -> i32,
) -> Option<i32> {
    strategy.fold(
        values,
        || None,
        |best, position, &value| {
            if Parity::of(position) != class {
                return best;
            }
            Some(best.map_or(value, |best| pick(best, value)))
        },
        |a, b| match (a, b) {
            (Some(a), Some(b)) => Some(pick(a, b)),
            (a, None) => a,
            (None, b) => b,
        },
    )
}

fn empty(len: usize, class: Parity) -> Error {
    warn!(len, %class, "partition is empty");
    Error::EmptyPartition(class)
}
