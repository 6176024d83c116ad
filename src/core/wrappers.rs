//! Storage implementations of the matrix-access traits.
//!
//! Two dense layouts are supported:
//! - `RowMatrix<T>` (`Vec<Vec<T>>`): row-major, caller-built rows. Rows are not forced to share a length,
//!   so rectangularity is checked at run time and the column count is taken from row 0.
//! - `faer::Mat<T>`: column-major storage from faer, always rectangular.
//!
//! Row swaps are O(1) pointer swaps for `RowMatrix` and an element-wise exchange for `faer::Mat`.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{FromFn, MatShape, RowAccess};
use faer::Mat;

/// Row-major dense matrix: a sequence of equally sized rows.
pub type RowMatrix<T> = Vec<Vec<T>>;

impl<T> MatShape for Vec<Vec<T>> {
    fn nrows(&self) -> usize {
        self.len()
    }
    fn ncols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }
}

impl<T: Copy> RowAccess<T> for Vec<Vec<T>> {
    fn get(&self, i: usize, j: usize) -> T {
        self[i][j]
    }
    fn set(&mut self, i: usize, j: usize, v: T) {
        self[i][j] = v;
    }
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
    fn is_rectangular(&self) -> bool {
        let m = self.ncols();
        self.iter().all(|row| row.len() == m)
    }
}

impl<T> FromFn<T> for Vec<Vec<T>> {
    fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        (0..nrows)
            .map(|i| (0..ncols).map(|j| f(i, j)).collect())
            .collect()
    }
}

impl<T> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Copy> RowAccess<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
    fn set(&mut self, i: usize, j: usize, v: T) {
        self[(i, j)] = v;
    }
    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = self[(a, j)];
            self[(a, j)] = self[(b, j)];
            self[(b, j)] = tmp;
        }
    }
}

impl<T> FromFn<T> for Mat<T> {
    fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        Mat::from_fn(nrows, ncols, f)
    }
}
