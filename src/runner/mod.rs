//! Timing harness and benchmark runner.
//!
//! A run is two independent, back-to-back timed passes over the same
//! sequence: sequential first, then parallel. Each pass is wrapped in
//! [`timed`], which measures only the counting call on a monotonic clock, so
//! input reading never leaks into either measurement. The parallel
//! measurement deliberately includes partitioning and thread dispatch:
//! reported speedups reflect true end-to-end parallel overhead, not an
//! idealized compute-only comparison.
//!
//! # Examples
//!
//! ```
//! use primescan::runner::BenchmarkRunner;
//!
//! let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let report = BenchmarkRunner::new().workers(4).run(&seq)?;
//!
//! assert_eq!(report.sequential_count, 4);
//! assert_eq!(report.parallel_count, 4);
//! assert!(report.counts_match());
//! # Ok::<(), primescan::PrimeScanError>(())
//! ```

use crate::core::count_sequential;
use crate::error::{PrimeScanError, Result};
use crate::parallel::{count_parallel, default_workers};
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run `f` and measure its wall-clock duration on a monotonic clock.
///
/// # Examples
///
/// ```
/// use primescan::runner::timed;
/// use primescan::core::count_sequential;
///
/// let seq = [2, 3, 4, 5];
/// let (count, _elapsed) = timed(|| count_sequential(&seq));
/// assert_eq!(count, 3);
/// ```
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Results of one benchmark run: both counts, both timings, and the worker
/// count used for the parallel pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunReport {
    /// Prime count from the sequential pass (the correctness baseline).
    pub sequential_count: u64,
    /// Prime count from the parallel pass.
    pub parallel_count: u64,
    /// Wall-clock duration of the sequential pass.
    pub sequential_elapsed: Duration,
    /// Wall-clock duration of the parallel pass, dispatch overhead included.
    pub parallel_elapsed: Duration,
    /// Workers used for the parallel pass.
    pub worker_count: usize,
}

impl RunReport {
    /// Sequential elapsed time in fractional milliseconds.
    #[must_use]
    pub fn sequential_ms(&self) -> f64 {
        self.sequential_elapsed.as_secs_f64() * 1_000.0
    }

    /// Parallel elapsed time in fractional milliseconds.
    #[must_use]
    pub fn parallel_ms(&self) -> f64 {
        self.parallel_elapsed.as_secs_f64() * 1_000.0
    }

    /// Speedup of the parallel pass over the sequential pass.
    ///
    /// Returns `None` when the parallel pass measured as zero, where the
    /// ratio is undefined.
    #[must_use]
    pub fn speedup(&self) -> Option<f64> {
        if self.parallel_elapsed.is_zero() {
            None
        } else {
            Some(self.sequential_ms() / self.parallel_ms())
        }
    }

    /// Returns `true` when both passes agree on the prime count.
    ///
    /// A mismatch indicates a bug in chunking or aggregation and should be
    /// treated as a hard error by callers.
    #[must_use]
    pub fn counts_match(&self) -> bool {
        self.sequential_count == self.parallel_count
    }
}

/// Fluent runner for a sequential-vs-parallel benchmark pass.
///
/// Holds the one tunable, the worker count, defaulting to the number of
/// available hardware execution units.
///
/// # Examples
///
/// ```
/// use primescan::runner::BenchmarkRunner;
///
/// // Hardware default worker count
/// let report = BenchmarkRunner::new().run(&[2, 3, 4])?;
/// assert_eq!(report.sequential_count, 2);
/// # Ok::<(), primescan::PrimeScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    workers: usize,
}

impl BenchmarkRunner {
    /// Create a runner with the hardware-default worker count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            workers: default_workers(),
        }
    }

    /// Override the worker count for the parallel pass.
    ///
    /// Validation happens in [`run`](Self::run): a zero value fails there
    /// before any counting work starts.
    #[must_use]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// The worker count this runner will use.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Time the sequential pass, then the parallel pass, over `seq`.
    ///
    /// # Errors
    ///
    /// - [`PrimeScanError::InvalidWorkerCount`] for a zero worker count,
    ///   raised before either pass runs
    /// - [`PrimeScanError::WorkerPanicked`] if the parallel pass fails
    pub fn run(&self, seq: &[i64]) -> Result<RunReport> {
        if self.workers == 0 {
            return Err(PrimeScanError::invalid_worker_count(self.workers));
        }

        let (sequential_count, sequential_elapsed) = timed(|| count_sequential(seq));
        let (parallel_result, parallel_elapsed) = timed(|| count_parallel(seq, self.workers));
        let parallel_count = parallel_result?;

        Ok(RunReport {
            sequential_count,
            parallel_count,
            sequential_elapsed,
            parallel_elapsed,
            worker_count: self.workers,
        })
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with_times(sequential: Duration, parallel: Duration) -> RunReport {
        RunReport {
            sequential_count: 10,
            parallel_count: 10,
            sequential_elapsed: sequential,
            parallel_elapsed: parallel,
            worker_count: 4,
        }
    }

    #[test]
    fn test_run_produces_matching_counts() {
        let seq: Vec<i64> = (0..2_000).collect();
        let report = BenchmarkRunner::new().workers(4).run(&seq).unwrap();
        assert!(report.counts_match());
        assert_eq!(report.worker_count, 4);
        assert_eq!(report.sequential_count, 303); // primes below 2000
    }

    #[test]
    fn test_run_on_empty_sequence() {
        let report = BenchmarkRunner::new().workers(2).run(&[]).unwrap();
        assert_eq!(report.sequential_count, 0);
        assert_eq!(report.parallel_count, 0);
        assert!(report.counts_match());
    }

    #[test]
    fn test_zero_workers_fails_before_any_pass() {
        let err = BenchmarkRunner::new().workers(0).run(&[2, 3]).unwrap_err();
        assert_eq!(err, PrimeScanError::invalid_worker_count(0));
    }

    #[test]
    fn test_default_worker_count_is_hardware_based() {
        let runner = BenchmarkRunner::new();
        assert!(runner.worker_count() >= 1);
        assert_eq!(runner.worker_count(), default_workers());
    }

    #[test]
    fn test_speedup_ratio() {
        let report =
            report_with_times(Duration::from_millis(100), Duration::from_millis(25));
        let speedup = report.speedup().unwrap();
        assert!((speedup - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_speedup_undefined_for_zero_parallel_time() {
        let report = report_with_times(Duration::from_millis(100), Duration::ZERO);
        assert_eq!(report.speedup(), None);
    }

    #[test]
    fn test_millisecond_conversion() {
        let report =
            report_with_times(Duration::from_micros(1_500), Duration::from_micros(500));
        assert!((report.sequential_ms() - 1.5).abs() < 1e-9);
        assert!((report.parallel_ms() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_timed_returns_closure_value() {
        let (value, elapsed) = timed(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::ZERO);
    }
}
