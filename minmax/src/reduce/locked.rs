use crate::{Accumulator, Extrema};
use tracing::debug;

/// Reduces `values` front to back on the calling thread.
///
/// Every store goes through the same lock-guarded [Accumulator] that [super::shared] uses.
/// With a single writer the lock never contends and never changes the outcome.
///
/// Accepts any iterator, so a failing or lazy source is consumed exactly once and its
/// behavior (including panics) reaches the caller unchanged.
pub fn locked<I>(values: I) -> Extrema
where
    I: IntoIterator<Item = i32>,
{
    let accumulator = Accumulator::new();
    let mut len = 0usize;
    for (position, value) in values.into_iter().enumerate() {
        accumulator.offer(position, value);
        len = position + 1;
    }
    let extrema = accumulator.into_extrema();
    debug!(
        len,
        min = extrema.min,
        max = extrema.max,
        "locked reduction complete"
    );
    extrema
}
