//! Core matrix-access traits for algobench.

/// Shape of a dense matrix.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
}

/// Element access and row reordering on dense storage.
pub trait RowAccess<T>: MatShape {
    /// Read A[i][j].
    fn get(&self, i: usize, j: usize) -> T;
    /// Write A[i][j] ← v.
    fn set(&mut self, i: usize, j: usize, v: T);
    /// Exchange rows `a` and `b`.
    fn swap_rows(&mut self, a: usize, b: usize);
    /// True when every row holds exactly `ncols()` entries.
    fn is_rectangular(&self) -> bool {
        true
    }
}

/// Construction of a new matrix from an element generator.
pub trait FromFn<T>: Sized {
    fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> T) -> Self;
}
