//! Sequential prime counting.
//!
//! The sequential scan is the correctness baseline: the parallel pass must
//! produce exactly the same count. It is also the per-chunk body that worker
//! tasks execute, restricted to their chunk's index range.

use super::oracle::is_prime;
use super::partition::Chunk;

/// Count the primes in `seq` with a single index-order scan.
///
/// Invokes the primality oracle once per element. This is the reference
/// implementation against which [`count_parallel`](crate::parallel::count_parallel)
/// is checked.
///
/// # Examples
///
/// ```
/// use primescan::core::count_sequential;
///
/// let seq = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// assert_eq!(count_sequential(&seq), 4); // 2, 3, 5, 7
/// ```
#[must_use]
pub fn count_sequential(seq: &[i64]) -> u64 {
    seq.iter().filter(|&&n| is_prime(n)).count() as u64
}

/// Count the primes within one chunk of `seq`.
///
/// This is the partial-result producer for the parallel pass: each worker
/// runs the sequential scan restricted to its chunk's index range.
///
/// # Panics
///
/// Panics if the chunk's range extends past the end of `seq`. Chunks obtained
/// from [`partition`](crate::core::partition) over `seq.len()` are always in
/// bounds.
#[must_use]
pub fn count_chunk(seq: &[i64], chunk: Chunk) -> u64 {
    count_sequential(&seq[chunk.range()])
}
