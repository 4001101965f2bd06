//! primescan: sequential vs. parallel prime counting with speedup reporting.
//!
//! primescan counts the primes in a finite sequence of signed 64-bit
//! integers twice, once with a plain sequential scan and once with a
//! chunked parallel scan, times both passes independently, and reports the
//! observed speedup. The two counts must always agree; the sequential scan
//! is the correctness baseline for the parallel one.
//!
//! # Quick Start
//!
//! ```
//! use primescan::runner::BenchmarkRunner;
//!
//! let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let report = BenchmarkRunner::new().workers(4).run(&numbers)?;
//!
//! assert_eq!(report.sequential_count, 4); // 2, 3, 5, 7
//! assert!(report.counts_match());
//! println!("{}", primescan::report::render_report(&report));
//! # Ok::<(), primescan::PrimeScanError>(())
//! ```
//!
//! # How the Parallel Pass Works
//!
//! 1. The partitioner splits `[0, len)` into at most `workers` contiguous
//!    chunks using ceiling division, so no trailing element is ever dropped
//! 2. One scoped worker thread per chunk runs the sequential counter
//!    restricted to its index range and returns its partial count
//! 3. All tasks are joined, then the partial counts are summed
//!
//! The sequence is the only shared resource and it is read-only for the
//! duration of a pass, so workers need no locks; partial counts are returned
//! values, not shared accumulators. Summation is associative and
//! commutative, so task completion order never affects the total.
//!
//! # Module Organization
//!
//! ```text
//! src/
//! ├── core/     - Primality oracle, sequential counter, partitioner
//! ├── parallel/ - Chunked scoped-thread counting (and optional rayon path)
//! ├── runner/   - Timing harness, BenchmarkRunner, RunReport
//! ├── report.rs - Text rendering, speedup line, mismatch warning
//! ├── input.rs  - Line-oriented integer file reading
//! └── error.rs  - PrimeScanError and Result alias
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` on [`Chunk`] and [`RunReport`]
//! - `rayon`: `parallel::count_parallel_rayon`, a work-stealing
//!   alternative to the scoped-thread pass

/// Core counting primitives: oracle, sequential counter, partitioner.
pub mod core;

/// Error types and the crate-wide `Result` alias.
pub mod error;

/// Line-oriented integer input (collaborator layer).
pub mod input;

/// Chunked parallel counting.
pub mod parallel;

/// Result text rendering (collaborator layer).
pub mod report;

/// Timing harness and benchmark runner.
pub mod runner;

pub use crate::core::{count_sequential, is_prime, partition, Chunk};
pub use crate::error::{PrimeScanError, Result};
pub use crate::parallel::{count_parallel, default_workers};
pub use crate::runner::{BenchmarkRunner, RunReport};

/// Convenience re-exports for typical usage.
///
/// ```
/// use primescan::prelude::*;
///
/// let report = BenchmarkRunner::new().workers(2).run(&[2, 3, 4])?;
/// assert_eq!(report.parallel_count, 2);
/// # Ok::<(), PrimeScanError>(())
/// ```
pub mod prelude {
    pub use crate::core::{count_chunk, count_sequential, is_prime, partition, Chunk};
    pub use crate::error::{PrimeScanError, Result};
    pub use crate::parallel::count_parallel;
    #[cfg(feature = "rayon")]
    pub use crate::parallel::count_parallel_rayon;
    pub use crate::parallel::default_workers;
    pub use crate::runner::{timed, BenchmarkRunner, RunReport};
}
