//! algobench: classical numeric and array algorithms with a timing driver
//!
//! This crate provides binary digit counting, factorial, dense matrix multiplication, linear search,
//! maximum finding, pairwise duplicate detection and Gaussian elimination with partial pivoting.
//! The algorithms keep their textbook loop structure so that the benchmark driver in [`perf`]
//! reproduces their complexity curves.

pub mod config;
pub mod core;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod perf;
pub mod scalar;
pub mod search;
pub mod solver;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use harness::Explorer;
pub use matrix::*;
pub use scalar::*;
pub use search::*;
pub use solver::*;
