//! Chunked parallel prime counting over scoped worker threads.
//!
//! # Design
//!
//! The parallel pass is a fork/join over the partitioner's chunks:
//!
//! 1. [`partition`] the index space into at most `workers` contiguous chunks
//! 2. Spawn one scoped thread per chunk; each runs the sequential counter
//!    restricted to its chunk and returns its partial count
//! 3. Join every task, then sum the partial counts
//!
//! Scoped threads (`std::thread::scope`) let workers borrow the sequence
//! directly: the sequence is the only shared resource, it is read-only for
//! the duration of the pass, and partial counts are returned values rather
//! than shared accumulators, so no locking is needed anywhere.
//!
//! The pool lives for exactly one pass. `scope` guarantees every spawned
//! task has terminated before `count_parallel` returns, on the error path
//! included, so no worker is ever left outstanding.
//!
//! # Failure Semantics
//!
//! The pass is all-or-nothing. If any worker panics, every remaining task is
//! still joined, completed siblings' counts are discarded, and the recovered
//! panic payload is surfaced as [`PrimeScanError::WorkerPanicked`]. A partial
//! count is never returned.

use crate::core::{count_chunk, partition};
use crate::error::{PrimeScanError, Result};
use std::any::Any;
use std::thread;

/// Default worker count: one per available hardware execution unit.
///
/// This is only a default. The worker count is always an explicit argument
/// to [`count_parallel`], never a hidden global.
#[must_use]
pub fn default_workers() -> usize {
    num_cpus::get().max(1)
}

/// Count the primes in `seq` using `workers` parallel chunk tasks.
///
/// The result is always equal to
/// [`count_sequential(seq)`](crate::core::count_sequential): summation over
/// partial counts is associative and commutative, so neither task scheduling
/// nor completion order can affect the total. With `workers == 1` the pass
/// degenerates to the sequential scan on one spawned thread.
///
/// An empty sequence returns `Ok(0)` without spawning any task.
///
/// # Errors
///
/// - [`PrimeScanError::InvalidWorkerCount`] if `workers == 0`
/// - [`PrimeScanError::WorkerPanicked`] if any chunk task fails to complete
///
/// # Examples
///
/// ```
/// use primescan::parallel::count_parallel;
///
/// let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(count_parallel(&seq, 4)?, 4);
/// # Ok::<(), primescan::PrimeScanError>(())
/// ```
pub fn count_parallel(seq: &[i64], workers: usize) -> Result<u64> {
    let chunks = partition(seq.len(), workers)?;
    if chunks.is_empty() {
        return Ok(0);
    }

    thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| scope.spawn(move || count_chunk(seq, chunk)))
            .collect();

        // Join every task before deciding the outcome, so a failure never
        // leaves a sibling running past the end of the pass.
        let mut total: u64 = 0;
        let mut failure: Option<PrimeScanError> = None;
        for handle in handles {
            match handle.join() {
                Ok(partial) => total += partial,
                Err(payload) => {
                    if failure.is_none() {
                        failure =
                            Some(PrimeScanError::worker_panicked(panic_message(payload.as_ref())));
                    }
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(total),
        }
    })
}

/// Count the primes in `seq` on rayon's work-stealing pool.
///
/// Alternative to [`count_parallel`] for callers already running inside a
/// rayon context. Chunking and thread lifetimes are delegated to rayon, so
/// the per-pass pool guarantees of [`count_parallel`] do not apply here.
#[cfg(feature = "rayon")]
#[must_use]
pub fn count_parallel_rayon(seq: &[i64]) -> u64 {
    use rayon::prelude::*;

    seq.par_iter()
        .filter(|&&n| crate::core::is_prime(n))
        .count() as u64
}

/// Recover a readable message from a worker's panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked with a non-string payload".to_string()
    }
}
