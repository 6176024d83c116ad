//! In-place Gaussian elimination with partial pivoting.
//!
//! Reduces an `n × m` matrix (n equations, m columns including any augmented right-hand side) to
//! row-echelon form. At step `i` the row with the largest `|A[k][i]|`, `k ≥ i`, is swapped into
//! position `i` and eliminated from every row below it.
//!
//! There is no back-substitution, column pivoting, or rank detection. Conditions that a fuller
//! solver would treat as failures are reported as [`Advisory`] values in the returned
//! [`EliminationReport`] and as `log::warn!` events, and the reduction carries on:
//! - an empty matrix is left untouched;
//! - more rows than columns only stops pivoting after the last column;
//! - an exactly zero pivot skips that step, leaving the column unreduced below it.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.4

use std::fmt;

use crate::core::traits::RowAccess;
use crate::error::{AlgoError, Result};
use num_traits::Float;

/// Non-fatal condition encountered during elimination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// Zero rows or zero columns; nothing was done.
    Degenerate,
    /// More equations than columns.
    MoreRowsThanColumns { rows: usize, cols: usize },
    /// The pivot `A[row][col]` was exactly zero after pivot selection; the step was skipped.
    ZeroPivot { row: usize, col: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Degenerate => write!(f, "matrix is empty, no operation performed"),
            Advisory::MoreRowsThanColumns { rows, cols } => write!(
                f,
                "more rows than columns ({rows}x{cols}), system may not be solvable by elimination"
            ),
            Advisory::ZeroPivot { row, col } => write!(
                f,
                "zero pivot at row {row}, column {col}: matrix may be singular"
            ),
        }
    }
}

/// Outcome of one elimination pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EliminationReport {
    /// Advisories in the order they were raised.
    pub advisories: Vec<Advisory>,
    /// Row exchanges actually performed.
    pub row_swaps: usize,
    /// Pivot steps that eliminated below the pivot (zero-pivot steps excluded).
    pub pivots_applied: usize,
}

impl EliminationReport {
    fn advise(&mut self, advisory: Advisory) {
        log::warn!("gaussian elimination: {advisory}");
        self.advisories.push(advisory);
    }

    /// True when no advisory was raised.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Columns whose pivot was exactly zero.
    pub fn zero_pivot_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.advisories.iter().filter_map(|a| match a {
            Advisory::ZeroPivot { col, .. } => Some(*col),
            _ => None,
        })
    }
}

/// Reduce `a` in place to row-echelon form.
///
/// Rows of `a` may be reordered and entries overwritten; clone beforehand to keep the original.
///
/// # Errors
/// `InvalidArgument` only when the rows of `a` differ in length; `a` is not touched in that case.
pub fn gaussian_elimination<T, M>(a: &mut M) -> Result<EliminationReport>
where
    T: Float,
    M: RowAccess<T>,
{
    if !a.is_rectangular() {
        return Err(AlgoError::invalid("matrix rows must all have the same length"));
    }
    let mut report = EliminationReport::default();
    let n = a.nrows();
    let m = a.ncols();
    if n == 0 || m == 0 {
        report.advise(Advisory::Degenerate);
        return Ok(report);
    }
    if n > m {
        report.advise(Advisory::MoreRowsThanColumns { rows: n, cols: m });
    }

    for i in 0..n.min(m) {
        let mut max_row = i;
        for k in (i + 1)..n {
            if a.get(k, i).abs() > a.get(max_row, i).abs() {
                max_row = k;
            }
        }
        if max_row != i {
            a.swap_rows(i, max_row);
            report.row_swaps += 1;
        }

        let pivot = a.get(i, i);
        if pivot == T::zero() {
            report.advise(Advisory::ZeroPivot { row: i, col: i });
            continue;
        }

        for j in (i + 1)..n {
            let factor = a.get(j, i) / pivot;
            for k in i..m {
                let reduced = a.get(j, k) - a.get(i, k) * factor;
                a.set(j, k, reduced);
            }
        }
        report.pivots_applied += 1;
    }
    Ok(report)
}
