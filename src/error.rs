//! Error types for primescan operations.
//!
//! All fallible operations in the crate return [`Result<T>`] where the error
//! type is [`PrimeScanError`]. The taxonomy is deliberately small: counting is
//! a pure computation, so errors only arise from configuration or from a
//! worker task failing to complete.
//!
//! # Error Propagation
//!
//! ```
//! use primescan::{Result, core::partition};
//!
//! fn chunk_count(len: usize, workers: usize) -> Result<usize> {
//!     let chunks = partition(len, workers)?;
//!     Ok(chunks.len())
//! }
//! # assert_eq!(chunk_count(10, 4).unwrap(), 4);
//! ```

use std::fmt;

/// Result type alias for primescan operations.
pub type Result<T> = std::result::Result<T, PrimeScanError>;

/// Errors that can occur while partitioning or counting.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - Each variant carries enough context to diagnose the failure
/// - The core never retries; errors are surfaced immediately
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimeScanError {
    /// Worker count of zero was requested.
    ///
    /// A zero-worker parallel pass can never make progress, so the request
    /// is rejected up front rather than silently clamped to one.
    InvalidWorkerCount {
        /// The invalid worker count that was provided.
        workers: usize,
    },

    /// One or more worker tasks did not complete.
    ///
    /// The parallel pass is all-or-nothing: if any chunk task fails, the
    /// whole aggregation fails and results from sibling tasks are discarded.
    /// The message carries the recovered panic payload.
    WorkerPanicked {
        /// Human-readable description of the underlying failure.
        message: String,
    },
}

impl fmt::Display for PrimeScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkerCount { workers } => {
                write!(
                    f,
                    "Invalid worker count: {}. At least one worker is required.",
                    workers
                )
            }
            Self::WorkerPanicked { message } => {
                write!(
                    f,
                    "Parallel pass failed, a worker task panicked: {}.",
                    message
                )
            }
        }
    }
}

impl std::error::Error for PrimeScanError {}

impl PrimeScanError {
    /// Create an `InvalidWorkerCount` error.
    #[must_use]
    pub fn invalid_worker_count(workers: usize) -> Self {
        Self::InvalidWorkerCount { workers }
    }

    /// Create a `WorkerPanicked` error from a recovered panic payload.
    #[must_use]
    pub fn worker_panicked(message: impl Into<String>) -> Self {
        Self::WorkerPanicked {
            message: message.into(),
        }
    }
}
