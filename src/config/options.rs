//! Command-line or API options for the benchmark driver.
//!
//! This module provides the `Algorithm` enum naming every timed operation, the reference table of
//! input sizes for each, and the `BenchOptions` struct selecting the output file, the random seed
//! and the subset of algorithms to run.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AlgoError;

/// Default CSV destination of the benchmark driver.
pub const DEFAULT_OUTPUT: &str = "algorithm_performance_data.csv";

/// Timed operations, in the order the driver runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Recursive binary digit count, input size is `n` itself
    CountBinaryDigitsRecursive,
    /// Iterative binary digit count
    CountBinaryDigitsIterative,
    /// Factorial of `n`
    Factorial,
    /// N×N by N×N product
    MatrixMultiplication,
    /// Worst-case (absent key) linear search
    SequentialSearch,
    /// Maximum of a double array
    FindMaxElement,
    /// Pairwise uniqueness check
    HasUniqueElements,
    /// Elimination of an N×N matrix
    GaussianElimination,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::CountBinaryDigitsRecursive,
        Algorithm::CountBinaryDigitsIterative,
        Algorithm::Factorial,
        Algorithm::MatrixMultiplication,
        Algorithm::SequentialSearch,
        Algorithm::FindMaxElement,
        Algorithm::HasUniqueElements,
        Algorithm::GaussianElimination,
    ];

    /// Identifier written to the `Algorithm` column.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::CountBinaryDigitsRecursive => "countBinaryDigitsRecursive",
            Algorithm::CountBinaryDigitsIterative => "countBinaryDigitsIterative",
            Algorithm::Factorial => "factorial",
            Algorithm::MatrixMultiplication => "matrixMultiplication",
            Algorithm::SequentialSearch => "sequentialSearch",
            Algorithm::FindMaxElement => "findMaxElement",
            Algorithm::HasUniqueElements => "hasUniqueElements",
            Algorithm::GaussianElimination => "gaussianElimination",
        }
    }

    /// Reference input sizes. For the matrix algorithms the size is the dimension N.
    pub fn default_sizes(self) -> &'static [u64] {
        match self {
            Algorithm::CountBinaryDigitsRecursive | Algorithm::CountBinaryDigitsIterative => &[
                1,
                10,
                100,
                1_000,
                10_000,
                100_000,
                1_000_000,
                10_000_000,
                100_000_000,
                1_000_000_000,
            ],
            // 20! is the last exact i64 factorial
            Algorithm::Factorial => &[0, 5, 10, 15, 20],
            Algorithm::MatrixMultiplication => &[5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100],
            Algorithm::SequentialSearch | Algorithm::FindMaxElement => {
                &[1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000]
            }
            Algorithm::HasUniqueElements => &[10, 50, 100, 200, 500, 1_000, 2_000, 3_000],
            Algorithm::GaussianElimination => &[5, 10, 20, 30, 40, 50, 60, 70, 80],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgoError;

    /// Accepts the CSV identifier case-insensitively, with or without `-`/`_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| AlgoError::invalid(format!("unknown algorithm: {s}")))
    }
}

/// Benchmark driver options.
#[derive(Debug, Clone)]
pub struct BenchOptions {
    /// CSV file, truncated at the start of each run
    pub output: PathBuf,
    /// Seed for input generation; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Algorithms to time, in order
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}
