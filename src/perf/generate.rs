//! Synthetic inputs for the timing runs.

use crate::core::RowMatrix;
use rand::Rng;

/// `size` integers drawn uniformly from `[0, max_val)`.
pub fn random_int_array<R: Rng + ?Sized>(rng: &mut R, size: usize, max_val: i32) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..max_val)).collect()
}

/// `size` doubles drawn uniformly from `[0, max_val)`.
pub fn random_double_array<R: Rng + ?Sized>(rng: &mut R, size: usize, max_val: f64) -> Vec<f64> {
    (0..size).map(|_| rng.r#gen::<f64>() * max_val).collect()
}

/// `dim × dim` matrix of doubles drawn uniformly from `[0, max_val)`.
pub fn random_square_matrix<R: Rng + ?Sized>(rng: &mut R, dim: usize, max_val: f64) -> RowMatrix<f64> {
    (0..dim).map(|_| random_double_array(&mut *rng, dim, max_val)).collect()
}
