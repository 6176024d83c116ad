//! Dense matrix product by the textbook triple loop.
//!
//! `C[i][j] = Σ_k A[i][k] · B[k][j]` with the loops nested i, j, k and no blocking or reordering, so the
//! running time follows the O(N³) curve exactly.

use crate::core::traits::{FromFn, RowAccess};
use crate::error::{AlgoError, Result};
use num_traits::Float;

/// Multiply two square matrices of equal dimension, returning a newly allocated product.
///
/// # Errors
/// `InvalidArgument` when either operand is empty, has rows of differing length, is not square,
/// or when the two dimensions differ.
pub fn multiply<T, M>(a: &M, b: &M) -> Result<M>
where
    T: Float,
    M: RowAccess<T> + FromFn<T>,
{
    let conformable = a.nrows() > 0
        && a.is_rectangular()
        && b.is_rectangular()
        && a.nrows() == a.ncols()
        && b.nrows() == b.ncols()
        && a.ncols() == b.nrows();
    if !conformable {
        return Err(AlgoError::invalid(format!(
            "matrices must be square and compatible for multiplication (A is {}x{}, B is {}x{})",
            a.nrows(),
            a.ncols(),
            b.nrows(),
            b.ncols()
        )));
    }
    let n = a.nrows();
    Ok(M::from_fn(n, n, |i, j| {
        let mut c = T::zero();
        for k in 0..n {
            c = c + a.get(i, k) * b.get(k, j);
        }
        c
    }))
}
