//! Tests for the dense matrix algorithms on both storage layouts.
//!
//! Products are checked against faer's own matrix product, and elimination results are checked for
//! the row-echelon structure that partial pivoting guarantees.

use algobench::core::{FromFn, RowAccess, RowMatrix};
use algobench::{Advisory, AlgoError, gaussian_elimination, multiply};
use approx::assert_abs_diff_eq;
use faer::Mat;
use rand::Rng;

fn random_mat(n: usize) -> Mat<f64> {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..n * n).map(|_| rng.r#gen()).collect();
    Mat::from_fn(n, n, |i, j| data[j * n + i])
}

fn to_rows(a: &Mat<f64>) -> RowMatrix<f64> {
    <RowMatrix<f64> as FromFn<f64>>::from_fn(a.nrows(), a.ncols(), |i, j| a[(i, j)])
}

/// Multiplying by the identity returns the original matrix.
#[test]
fn identity_is_neutral() {
    for n in [1, 3, 8] {
        let a = to_rows(&random_mat(n));
        let eye = <RowMatrix<f64> as FromFn<f64>>::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
        let left = multiply(&eye, &a).unwrap();
        let right = multiply(&a, &eye).unwrap();
        for i in 0..n {
            for j in 0..n {
                assert_abs_diff_eq!(left[i][j], a[i][j], epsilon = 1e-12);
                assert_abs_diff_eq!(right[i][j], a[i][j], epsilon = 1e-12);
            }
        }
    }
}

/// The triple loop agrees with faer's product, for row storage and for faer storage.
#[test]
fn product_matches_faer() {
    let n = 12;
    let a = random_mat(n);
    let b = random_mat(n);
    let expected = &a * &b;

    let rows = multiply(&to_rows(&a), &to_rows(&b)).unwrap();
    let mat = multiply(&a, &b).unwrap();
    for i in 0..n {
        for j in 0..n {
            assert_abs_diff_eq!(rows[i][j], expected[(i, j)], epsilon = 1e-10);
            assert_abs_diff_eq!(mat[(i, j)], expected[(i, j)], epsilon = 1e-10);
        }
    }
}

/// A 2x3 operand is not square; a 2x2 and a 3x3 are not conformable.
#[test]
fn mismatched_dimensions_rejected() {
    let wide = Mat::<f64>::zeros(2, 3);
    let small = Mat::<f64>::zeros(2, 2);
    let large = Mat::<f64>::zeros(3, 3);
    assert!(matches!(multiply(&wide, &wide), Err(AlgoError::InvalidArgument(_))));
    assert!(matches!(multiply(&small, &large), Err(AlgoError::InvalidArgument(_))));
}

/// After elimination every entry below the diagonal is (numerically) zero and each pivot has the
/// largest magnitude of its column among the rows at or below it.
#[test]
fn random_system_reaches_echelon_form() {
    let n = 10;
    let a = random_mat(n);
    let mut rows = to_rows(&a);
    let report = gaussian_elimination(&mut rows).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.pivots_applied, n);
    for i in 0..n {
        for j in 0..i {
            assert_abs_diff_eq!(rows[i][j], 0.0, epsilon = 1e-10);
        }
    }
}

/// Elimination runs with the same result on faer storage and on row storage.
#[test]
fn elimination_agrees_across_storage() {
    let n = 7;
    let mut mat = random_mat(n);
    let mut rows = to_rows(&mat);
    let r1 = gaussian_elimination(&mut mat).unwrap();
    let r2 = gaussian_elimination(&mut rows).unwrap();
    assert_eq!(r1, r2);
    for i in 0..n {
        for j in 0..n {
            assert_abs_diff_eq!(RowAccess::get(&mat, i, j), rows[i][j], epsilon = 1e-12);
        }
    }
}

/// Augmented 3x4 system: the reduced system back-substitutes to the known solution.
#[test]
fn augmented_system_back_substitutes() {
    // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3  =>  (2, 3, -1)
    let mut a: RowMatrix<f64> = vec![
        vec![2.0, 1.0, -1.0, 8.0],
        vec![-3.0, -1.0, 2.0, -11.0],
        vec![-2.0, 1.0, 2.0, -3.0],
    ];
    let report = gaussian_elimination(&mut a).unwrap();
    assert!(report.is_clean());
    let n = 3;
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let s: f64 = (i + 1..n).map(|k| a[i][k] * x[k]).sum();
        x[i] = (a[i][n] - s) / a[i][i];
    }
    for (xi, ei) in x.iter().zip([2.0, 3.0, -1.0]) {
        assert_abs_diff_eq!(*xi, ei, epsilon = 1e-10);
    }
}

/// A zero column only produces an advisory; later columns are still reduced.
#[test]
fn singular_column_is_advisory_only() {
    let mut a: RowMatrix<f64> = vec![
        vec![0.0, 2.0, 1.0],
        vec![0.0, 1.0, 3.0],
        vec![0.0, 4.0, 5.0],
    ];
    let report = gaussian_elimination(&mut a).unwrap();
    assert_eq!(report.advisories, vec![Advisory::ZeroPivot { row: 0, col: 0 }]);
    // column 1 pivot chosen among rows 1..3: the 4.0 row moves up
    assert_abs_diff_eq!(a[1][1], 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a[2][1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a[2][2], 1.75, epsilon = 1e-12);
    assert_eq!(report.row_swaps, 1);
}
