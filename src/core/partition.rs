//! Chunk partitioning for parallel dispatch.
//!
//! Splits the index space of a number sequence into contiguous,
//! non-overlapping, size-balanced chunks, one per worker. Chunk size uses
//! ceiling division so that no trailing elements are ever dropped when the
//! worker count does not evenly divide the sequence length; the last chunk is
//! simply clamped and may run short.
//!
//! Partitioning is fully deterministic: the same `(len, workers)` pair always
//! produces identical chunk boundaries, which keeps benchmark runs
//! reproducible and the parallel pass testable.

use crate::error::{PrimeScanError, Result};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A half-open index range `[start, end)` into a number sequence.
///
/// Chunks produced by one [`partition`] call are pairwise disjoint and their
/// union is exactly `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    start: usize,
    end: usize,
}

impl Chunk {
    /// Create a chunk covering `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "chunk start {} exceeds end {}", start, end);
        Self { start, end }
    }

    /// First index covered by this chunk.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last index covered by this chunk.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the chunk covers no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The chunk as a `Range` suitable for slicing.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, len)` into at most `workers` contiguous chunks.
///
/// Chunk length is `ceil(len / workers)`; chunks are emitted in index order
/// while `start < len`, so degenerate empty chunks are never produced (a
/// short sequence simply yields fewer chunks than workers). An empty sequence
/// yields no chunks at all.
///
/// # Errors
///
/// Returns [`PrimeScanError::InvalidWorkerCount`] if `workers == 0`. A
/// zero-worker request can never make progress, so it is rejected rather than
/// silently clamped.
///
/// # Examples
///
/// ```
/// use primescan::core::partition;
///
/// let chunks = partition(10, 4)?;
/// let bounds: Vec<_> = chunks.iter().map(|c| (c.start(), c.end())).collect();
/// assert_eq!(bounds, [(0, 3), (3, 6), (6, 9), (9, 10)]);
/// # Ok::<(), primescan::PrimeScanError>(())
/// ```
pub fn partition(len: usize, workers: usize) -> Result<Vec<Chunk>> {
    if workers == 0 {
        return Err(PrimeScanError::invalid_worker_count(workers));
    }
    if len == 0 {
        return Ok(Vec::new());
    }

    let chunk_len = len.div_ceil(workers);
    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;
    while start < len {
        let end = (start + chunk_len).min(len);
        chunks.push(Chunk::new(start, end));
        start = end;
    }
    Ok(chunks)
}
