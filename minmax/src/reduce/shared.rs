use crate::{Accumulator, Extrema};
use minmax_parallel::Strategy;
use tracing::debug;

/// Reduces `values` with a parallel-for over a shared [Accumulator].
///
/// Best-effort: each worker compares against a field it read without the lock and only then
/// takes the lock to store. Under contention a worker acting on a stale read can overwrite a
/// more extreme value, so the result may be less extreme than the true answer. It is always
/// either a value that appeared at a position of the right class or the field's sentinel.
///
/// With one worker (or no contention) the result equals [super::locked].
pub fn shared<S: Strategy>(strategy: &S, values: &[i32]) -> Extrema {
    let accumulator = Accumulator::new();
    strategy.for_each(values, |position, &value| {
        accumulator.offer(position, value)
    });
    let extrema = accumulator.into_extrema();
    debug!(
        len = values.len(),
        parallelism = strategy.parallelism(),
        min = extrema.min,
        max = extrema.max,
        "shared reduction complete"
    );
    extrema
}
