//! Core counting primitives.
//!
//! This module contains the pure, single-threaded building blocks that both
//! counting strategies share:
//!
//! - **Oracle**: [`is_prime`], 6k±1 trial division over `u64` arithmetic
//! - **Sequential counter**: [`count_sequential`] and the per-chunk
//!   [`count_chunk`] it is built from
//! - **Partitioner**: [`Chunk`] and [`partition`], deterministic
//!   ceiling-division chunking
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── oracle.rs     - Primality test
//! ├── sequential.rs - Index-order counting
//! ├── partition.rs  - Chunk type and partitioning
//! └── mod.rs        - This file (public API)
//! ```
//!
//! # Design Principles
//!
//! 1. **Purity**: every function here is deterministic and side-effect free
//! 2. **Shared read-only data**: counting borrows the sequence, never copies
//!    or mutates it, so workers need no synchronization
//! 3. **Determinism**: identical inputs always produce identical chunk
//!    boundaries and counts, keeping benchmark runs reproducible

mod oracle;
mod partition;
mod sequential;

pub use oracle::is_prime;
pub use partition::{partition, Chunk};
pub use sequential::{count_chunk, count_sequential};
