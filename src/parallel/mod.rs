//! Parallel prime counting.
//!
//! One counting strategy lives here: [`count_parallel`], a fork/join over
//! the partitioner's chunks using scoped worker threads. The pool is created
//! for a single pass and fully torn down before the call returns, and the
//! caller blocks until every chunk task has completed.
//!
//! With the `rayon` feature enabled, [`count_parallel_rayon`] offers a
//! work-stealing alternative for callers already running inside a rayon
//! pool.

mod counter;

#[cfg(feature = "rayon")]
pub use counter::count_parallel_rayon;
pub use counter::{count_parallel, default_workers};
