use crate::Extrema;
use minmax_parallel::Strategy;
use tracing::debug;

/// Reduces `values` into per-worker partial results and merges them once at the end.
///
/// No state is shared while workers run, so there is neither a lock nor a race, and the result
/// always equals [super::locked]. Unlike [super::partitioned], empty partitions are not an
/// error: a class with no values keeps its sentinel.
pub fn folded<S: Strategy>(strategy: &S, values: &[i32]) -> Extrema {
    let extrema = strategy.fold(
        values,
        Extrema::default,
        |mut acc, position, &value| {
            acc.observe(position, value);
            acc
        },
        Extrema::merge,
    );
    debug!(
        len = values.len(),
        parallelism = strategy.parallelism(),
        min = extrema.min,
        max = extrema.max,
        "folded reduction complete"
    );
    extrema
}
