//! Benchmark driver: times each algorithm across its reference input sizes.
//!
//! For every `(algorithm, size)` pair the driver generates a fresh synthetic input, times exactly one
//! call with [`Instant`], and appends an `Algorithm,InputSize,ExecutionTimeNs` row to a [`CsvSink`].
//! Input generation and the deep copy handed to Gaussian elimination happen outside the timed region.
//!
//! # Usage
//! ```rust,no_run
//! use algobench::{BenchOptions, perf};
//! let records = perf::run(&BenchOptions::default()).unwrap();
//! println!("{} timings written", records.len());
//! ```

pub mod generate;
pub mod record;

pub use generate::{random_double_array, random_int_array, random_square_matrix};
pub use record::{CSV_HEADER, CsvSink, PerfRecord};

use std::hint::black_box;
use std::io;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Algorithm, BenchOptions};
use crate::error::{AlgoError, Result};
use crate::{matrix, scalar, search, solver};

/// Upper bound (exclusive) of sequential-search array elements.
pub const SEARCH_MAX_VALUE: i32 = 10_000_000;
/// Key absent from every generated search array, forcing the full scan.
pub const MISSING_KEY: i32 = -1;
/// Upper bound (exclusive) of maximum-element array elements.
pub const MAX_ELEMENT_MAX_VALUE: f64 = 1_000_000.0;
/// Upper bound (exclusive) of generated matrix entries.
pub const MATRIX_MAX_VALUE: f64 = 100.0;

/// Times one call of `f`, returning its output and the elapsed nanoseconds.
fn timed<O>(f: impl FnOnce() -> O) -> (O, u64) {
    let start = Instant::now();
    let out = black_box(f());
    let ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    (out, ns)
}

fn usize_size(size: u64) -> Result<usize> {
    usize::try_from(size).map_err(|_| AlgoError::invalid(format!("input size {size} too large")))
}

/// Timing driver over a random source.
pub struct PerformanceAnalyzer<R> {
    rng: R,
}

impl PerformanceAnalyzer<StdRng> {
    /// Seeded from `options.seed`, or from OS entropy when unset.
    pub fn from_options(options: &BenchOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> PerformanceAnalyzer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate an input of `size` for `algorithm` and time a single call on it.
    ///
    /// # Errors
    /// `InvalidArgument` when the algorithm rejects the generated input or the size does not fit
    /// the algorithm's argument type.
    pub fn measure(&mut self, algorithm: Algorithm, size: u64) -> Result<PerfRecord> {
        let ns = match algorithm {
            Algorithm::CountBinaryDigitsRecursive => {
                let n = i64::try_from(size).map_err(|_| AlgoError::invalid("n out of range"))?;
                let (out, ns) = timed(|| scalar::count_binary_digits_recursive(n));
                out?;
                ns
            }
            Algorithm::CountBinaryDigitsIterative => {
                let n = i64::try_from(size).map_err(|_| AlgoError::invalid("n out of range"))?;
                let (out, ns) = timed(|| scalar::count_binary_digits(n));
                out?;
                ns
            }
            Algorithm::Factorial => {
                let n = i32::try_from(size).map_err(|_| AlgoError::invalid("n out of range"))?;
                let (out, ns) = timed(|| scalar::factorial(n));
                out?;
                ns
            }
            Algorithm::MatrixMultiplication => {
                let dim = usize_size(size)?;
                let a = random_square_matrix(&mut self.rng, dim, MATRIX_MAX_VALUE);
                let b = random_square_matrix(&mut self.rng, dim, MATRIX_MAX_VALUE);
                let (out, ns) = timed(|| matrix::multiply(&a, &b));
                out?;
                ns
            }
            Algorithm::SequentialSearch => {
                let arr = random_int_array(&mut self.rng, usize_size(size)?, SEARCH_MAX_VALUE);
                let (_, ns) = timed(|| search::sequential_search(&arr, &MISSING_KEY));
                ns
            }
            Algorithm::FindMaxElement => {
                let arr = random_double_array(&mut self.rng, usize_size(size)?, MAX_ELEMENT_MAX_VALUE);
                let (out, ns) = timed(|| search::find_max_element(&arr));
                out?;
                ns
            }
            Algorithm::HasUniqueElements => {
                let n = usize_size(size)?;
                // values in [0, 2n): some runs are unique, most are not
                let max_val = i32::try_from(n.saturating_mul(2).max(1))
                    .map_err(|_| AlgoError::invalid("n out of range"))?;
                let arr = random_int_array(&mut self.rng, n, max_val);
                let (_, ns) = timed(|| search::has_unique_elements(&arr));
                ns
            }
            Algorithm::GaussianElimination => {
                let dim = usize_size(size)?;
                let original = random_square_matrix(&mut self.rng, dim, MATRIX_MAX_VALUE);
                let mut work = original.clone();
                let (out, ns) = timed(|| solver::gaussian_elimination(&mut work));
                out?;
                ns
            }
        };
        Ok(PerfRecord {
            algorithm: algorithm.name().to_string(),
            input_size: size,
            execution_time_ns: ns,
        })
    }

    /// Time every algorithm in `algorithms` over its default sizes, streaming rows into `sink`.
    ///
    /// An input rejected by an algorithm is logged and skipped; sink errors abort the run.
    pub fn analyze<W: io::Write>(
        &mut self,
        algorithms: &[Algorithm],
        sink: &mut CsvSink<W>,
    ) -> Result<Vec<PerfRecord>> {
        let mut records = Vec::new();
        for &algorithm in algorithms {
            log::info!("analyzing {algorithm}");
            for &size in algorithm.default_sizes() {
                match self.measure(algorithm, size) {
                    Ok(record) => {
                        log::info!("  N={size}, Time={}ns", record.execution_time_ns);
                        sink.append(&record)?;
                        records.push(record);
                    }
                    Err(AlgoError::InvalidArgument(msg)) => {
                        log::error!("  error for N={size}: {msg}");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(records)
    }
}

/// Run the configured analysis, writing the CSV file named by `options.output`.
pub fn run(options: &BenchOptions) -> Result<Vec<PerfRecord>> {
    log::info!("starting algorithm performance analysis");
    let mut sink = CsvSink::create(&options.output)?;
    let mut analyzer = PerformanceAnalyzer::from_options(options);
    let records = analyzer.analyze(&options.algorithms, &mut sink)?;
    sink.finish()?;
    log::info!(
        "performance analysis complete, {} records saved to {}",
        records.len(),
        options.output.display()
    );
    Ok(records)
}
