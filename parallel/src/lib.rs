//! Position-aware data parallelism over slices.
//!
//! This crate provides the [`Strategy`] trait, which abstracts over sequential and parallel
//! execution of the loops a reduction needs. Every operation hands the closure the 0-based
//! position of the element alongside the element itself, so algorithms that depend on where a
//! value sits in its input (and not only on what it is) can be written once and executed either
//! sequentially or in parallel.
//!
//! # Overview
//!
//! - [`fold`](Strategy::fold): Reduces a slice to a single value with per-partition accumulators
//!   merged by an associative combine step
//! - [`for_each`](Strategy::for_each): Visits every element exactly once, in no particular order
//! - [`join`](Strategy::join): Runs two independent closures and waits for both
//! - [`parallelism`](Strategy::parallelism): Reports how many workers may run at once
//!
//! Two implementations are provided:
//!
//! - [`Sequential`]: Executes operations on the current thread (works in `no_std`)
//! - [`Parallel`]: Executes operations on a rayon thread pool (requires `std`)
//!
//! # Features
//!
//! - `std` (default): Enables the [`Parallel`] strategy backed by rayon
//!
//! # Example
//!
//! ```
//! use minmax_parallel::{Sequential, Strategy};
//!
//! fn weighted_sum<S: Strategy>(strategy: &S, data: &[i64]) -> i64 {
//!     strategy.fold(
//!         data,
//!         || 0i64,
//!         |acc, position, &x| acc + position as i64 * x,
//!         |a, b| a + b,
//!     )
//! }
//!
//! let data = vec![5, 4, 3, 2, 1];
//! assert_eq!(weighted_sum(&Sequential, &data), 4 + 6 + 6 + 4);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use cfg_if::cfg_if;
use core::fmt;

cfg_if! {
    if #[cfg(feature = "std")] {
        use rayon::{
            iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator},
            ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder,
        };
        use std::sync::Arc;
    }
}

/// A strategy for executing folds, parallel-for loops, and joins.
///
/// Implementations decide how work is scheduled; they never change what is computed for
/// operations whose combine step is associative and commutative.
pub trait Strategy: Clone + Send + Sync + fmt::Debug + 'static {
    /// Reduces a slice to a single value.
    ///
    /// The slice is split into partitions (a single partition for [`Sequential`]). Each
    /// partition starts from `identity()` and folds its elements in order with `fold_op`, which
    /// receives the accumulator, the element's position in `items`, and the element. Partial
    /// accumulators are then combined with `reduce_op` in an unspecified grouping, so
    /// `reduce_op` must be associative and `identity()` must be its neutral element.
    ///
    /// An empty slice yields `identity()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_parallel::{Sequential, Strategy};
    ///
    /// let data = vec![3, 1, 4, 1, 5, 9];
    ///
    /// // Largest value found at an even position
    /// let best = Sequential.fold(
    ///     &data,
    ///     || None,
    ///     |acc: Option<i32>, position, &x| {
    ///         if position % 2 == 0 {
    ///             Some(acc.map_or(x, |y| y.max(x)))
    ///         } else {
    ///             acc
    ///         }
    ///     },
    ///     |a, b| a.max(b),
    /// );
    /// assert_eq!(best, Some(5));
    /// ```
    fn fold<T, R, ID, F, RD>(&self, items: &[T], identity: ID, fold_op: F, reduce_op: RD) -> R
    where
        T: Sync,
        R: Send,
        ID: Fn() -> R + Send + Sync,
        F: Fn(R, usize, &T) -> R + Send + Sync,
        RD: Fn(R, R) -> R + Send + Sync;

    /// Calls `op` once for every element with its position.
    ///
    /// Dispatch order is unspecified for [`Parallel`], and calls may run concurrently. Any state
    /// `op` mutates must therefore be synchronized by `op` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use minmax_parallel::{Sequential, Strategy};
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let data = vec![10, 20, 30];
    /// let visited = AtomicUsize::new(0);
    /// Sequential.for_each(&data, |position, &x| {
    ///     assert_eq!(x, (position + 1) * 10);
    ///     visited.fetch_add(1, Ordering::Relaxed);
    /// });
    /// assert_eq!(visited.into_inner(), 3);
    /// ```
    fn for_each<T, F>(&self, items: &[T], op: F)
    where
        T: Sync,
        F: Fn(usize, &T) + Send + Sync;

    /// Runs `a` and `b`, possibly concurrently, and returns both results once both have
    /// completed.
    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;

    /// Returns the maximum number of workers that may execute operations at once.
    fn parallelism(&self) -> usize;
}

/// A sequential execution strategy.
///
/// This strategy executes all operations on the current thread, in position order. It is
/// useful for:
///
/// - Deterministic execution in tests
/// - `no_std` environments where threading is unavailable
/// - Establishing a single-worker baseline when comparing against [`Parallel`]
///
/// # Examples
///
/// ```
/// use minmax_parallel::{Sequential, Strategy};
///
/// let (left, right) = Sequential.join(|| 1 + 1, || "two");
/// assert_eq!((left, right), (2, "two"));
/// assert_eq!(Sequential.parallelism(), 1);
/// ```
#[derive(Default, Debug, Clone, Copy)]
pub struct Sequential;

impl Strategy for Sequential {
    fn fold<T, R, ID, F, RD>(&self, items: &[T], identity: ID, fold_op: F, _reduce_op: RD) -> R
    where
        T: Sync,
        R: Send,
        ID: Fn() -> R + Send + Sync,
        F: Fn(R, usize, &T) -> R + Send + Sync,
        RD: Fn(R, R) -> R + Send + Sync,
    {
        items
            .iter()
            .enumerate()
            .fold(identity(), |acc, (position, item)| {
                fold_op(acc, position, item)
            })
    }

    fn for_each<T, F>(&self, items: &[T], op: F)
    where
        T: Sync,
        F: Fn(usize, &T) + Send + Sync,
    {
        for (position, item) in items.iter().enumerate() {
            op(position, item);
        }
    }

    fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        (a(), b())
    }

    fn parallelism(&self) -> usize {
        1
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        /// A parallel execution strategy backed by a rayon thread pool.
        ///
        /// # Thread Pool Ownership
        ///
        /// `Parallel` holds an [`Arc<ThreadPool>`], so it can be cheaply cloned and shared
        /// across threads. Multiple [`Parallel`] instances can share the same underlying
        /// thread pool.
        ///
        /// A pool with a single thread still runs work off the calling thread, but never
        /// runs two closures at once, so it behaves like [`Sequential`] with respect to
        /// contention.
        ///
        /// # Examples
        ///
        /// ```
        /// use minmax_parallel::{Parallel, Strategy};
        ///
        /// let strategy = Parallel::with_threads(2).unwrap();
        /// assert_eq!(strategy.parallelism(), 2);
        ///
        /// let data: Vec<i64> = (0..1000).collect();
        /// let sum = strategy.fold(&data, || 0i64, |acc, _, &n| acc + n, |a, b| a + b);
        /// assert_eq!(sum, 499500);
        /// ```
        #[derive(Debug, Clone)]
        pub struct Parallel {
            thread_pool: Arc<ThreadPool>,
        }

        impl Parallel {
            /// Creates a new [`Parallel`] strategy with the given [`ThreadPool`].
            pub const fn new(thread_pool: Arc<ThreadPool>) -> Self {
                Self { thread_pool }
            }

            /// Creates a new [`Parallel`] strategy backed by a dedicated pool of `threads`
            /// workers.
            ///
            /// Passing `0` lets rayon choose (usually the number of logical CPUs).
            pub fn with_threads(threads: usize) -> Result<Self, ThreadPoolBuildError> {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("minmax-worker-{i}"))
                    .build()?;
                Ok(Self::new(Arc::new(pool)))
            }
        }

        impl From<Arc<ThreadPool>> for Parallel {
            fn from(thread_pool: Arc<ThreadPool>) -> Self {
                Self::new(thread_pool)
            }
        }

        impl Strategy for Parallel {
            fn fold<T, R, ID, F, RD>(
                &self,
                items: &[T],
                identity: ID,
                fold_op: F,
                reduce_op: RD,
            ) -> R
            where
                T: Sync,
                R: Send,
                ID: Fn() -> R + Send + Sync,
                F: Fn(R, usize, &T) -> R + Send + Sync,
                RD: Fn(R, R) -> R + Send + Sync,
            {
                self.thread_pool.install(|| {
                    items
                        .par_iter()
                        .enumerate()
                        .fold(&identity, |acc, (position, item)| fold_op(acc, position, item))
                        .reduce(&identity, &reduce_op)
                })
            }

            fn for_each<T, F>(&self, items: &[T], op: F)
            where
                T: Sync,
                F: Fn(usize, &T) + Send + Sync,
            {
                self.thread_pool.install(|| {
                    items
                        .par_iter()
                        .enumerate()
                        .for_each(|(position, item)| op(position, item));
                });
            }

            fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
            where
                A: FnOnce() -> RA + Send,
                B: FnOnce() -> RB + Send,
                RA: Send,
                RB: Send,
            {
                self.thread_pool.join(a, b)
            }

            fn parallelism(&self) -> usize {
                self.thread_pool.current_num_threads()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Parallel, Sequential, Strategy};
    use proptest::prelude::*;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    /// Creates a Parallel strategy for testing.
    fn parallel_strategy() -> Parallel {
        Parallel::with_threads(4).unwrap()
    }

    #[test]
    fn fold_empty_returns_identity() {
        let empty: Vec<i64> = vec![];

        // An empty fold may still combine identities, so use one that is neutral for `max`
        let seq_result =
            Sequential.fold(&empty, || i64::MIN, |acc, _, &x| acc.max(x), i64::max);
        let par_result =
            parallel_strategy().fold(&empty, || i64::MIN, |acc, _, &x| acc.max(x), i64::max);

        assert_eq!(seq_result, i64::MIN);
        assert_eq!(par_result, i64::MIN);
    }

    #[test]
    fn fold_empty_returns_identity_collection() {
        let empty: Vec<i64> = vec![];
        let concat = |mut a: Vec<i64>, b: Vec<i64>| {
            a.extend(b);
            a
        };

        let seq_result = Sequential.fold(&empty, Vec::new, |acc, _, _| acc, concat);
        let par_result =
            parallel_strategy().fold(&empty, Vec::new, |acc, _, _| acc, concat);

        assert!(seq_result.is_empty());
        assert!(par_result.is_empty());
    }

    #[test]
    fn for_each_empty_never_calls() {
        let empty: Vec<i64> = vec![];
        let calls = AtomicUsize::new(0);

        Sequential.for_each(&empty, |_, _| {
            calls.fetch_add(1, Ordering::Relaxed);
        });
        parallel_strategy().for_each(&empty, |_, _| {
            calls.fetch_add(1, Ordering::Relaxed);
        });

        assert_eq!(calls.into_inner(), 0);
    }

    #[test]
    fn sequential_for_each_in_order() {
        let data = vec!['a', 'b', 'c', 'd'];
        let next = AtomicUsize::new(0);
        Sequential.for_each(&data, |position, _| {
            assert_eq!(next.fetch_add(1, Ordering::Relaxed), position);
        });
        assert_eq!(next.into_inner(), data.len());
    }

    #[test]
    fn parallel_join_runs_on_pool() {
        let strategy = parallel_strategy();
        let caller = thread::current().id();
        let (a, b) = strategy.join(|| thread::current().id(), || thread::current().id());
        assert_ne!(a, caller);
        assert_ne!(b, caller);
    }

    #[test]
    fn with_threads_reports_parallelism() {
        assert_eq!(Parallel::with_threads(1).unwrap().parallelism(), 1);
        assert_eq!(Parallel::with_threads(3).unwrap().parallelism(), 3);
        assert_eq!(Sequential.parallelism(), 1);
    }

    proptest! {
        #[test]
        fn fold_range_sum(end in 0u64..10000) {
            let range: Vec<u64> = (0..end).collect();

            let seq_result = Sequential.fold(&range, || 0u64, |acc, _, &x| acc + x, |a, b| a + b);
            let par_result =
                parallel_strategy().fold(&range, || 0u64, |acc, _, &x| acc + x, |a, b| a + b);

            let expected = (0..end).sum::<u64>();
            prop_assert_eq!(seq_result, expected);
            prop_assert_eq!(par_result, expected);
        }

        #[test]
        fn fold_positions_match_indices(data in prop::collection::vec(any::<i32>(), 0..500)) {
            // Collect (position, value) pairs and restore order after the parallel merge
            let collect = |mut acc: Vec<(usize, i32)>, position: usize, &x: &i32| {
                acc.push((position, x));
                acc
            };
            let concat = |mut a: Vec<(usize, i32)>, b: Vec<(usize, i32)>| {
                a.extend(b);
                a
            };

            let seq_result = Sequential.fold(&data, Vec::new, collect, concat);
            let mut par_result = parallel_strategy().fold(&data, Vec::new, collect, concat);
            par_result.sort_unstable_by_key(|(position, _)| *position);

            let expected: Vec<(usize, i32)> = data.iter().copied().enumerate().collect();
            prop_assert_eq!(seq_result, expected.clone());
            prop_assert_eq!(par_result, expected);
        }

        #[test]
        fn for_each_visits_every_position_once(len in 0usize..2000) {
            let data = vec![0u8; len];
            let hits: Vec<AtomicUsize> = (0..len).map(|_| AtomicUsize::new(0)).collect();

            parallel_strategy().for_each(&data, |position, _| {
                hits[position].fetch_add(1, Ordering::Relaxed);
            });

            prop_assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
        }

        #[test]
        fn join_returns_both(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(Sequential.join(|| a, || b), (a, b));
            prop_assert_eq!(parallel_strategy().join(|| a, || b), (a, b));
        }
    }
}
