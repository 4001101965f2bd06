//! Primality oracle based on 6k±1 trial division.
//!
//! After ruling out multiples of 2 and 3, every remaining prime candidate has
//! the form `6k ± 1`, so the divisor loop only visits two residues per block
//! of six. The loop terminates once `candidate² > n`.
//!
//! # Overflow Safety
//!
//! The divisor loop squares the candidate, so the test runs in `u64`
//! arithmetic. The largest candidate examined is at most `√n + 6`; for the
//! maximum input `i64::MAX` (< 2⁶³) that square stays below 2⁶³ + 2³⁷, well
//! inside the `u64` range. Every `i64` input is therefore supported without
//! overflow.

/// Returns `true` if `n` is prime.
///
/// Negative numbers, zero, and one are not prime. The test is a pure
/// function with no shared state, so it is safe to call concurrently from
/// any number of worker threads.
///
/// # Examples
///
/// ```
/// use primescan::core::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(100));
/// assert!(!is_prime(-7));
/// ```
#[must_use]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let n = n as u64;
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut candidate: u64 = 5;
    while candidate * candidate <= n {
        if n % candidate == 0 || n % (candidate + 2) == 0 {
            return false;
        }
        candidate += 6;
    }
    true
}
