//! Gaussian elimination based determinant and Gauss-Jordan inverse.
//!
//! Both routines work on an owned copy of the input; the caller's matrix is never touched.

use crate::{error::MatrixError, matrix::Matrix};

/// Determinants with a magnitude below this value are treated as zero by [`inverse`].
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Index of the row in `col..n` holding the largest absolute value in column `col`.
///
/// Ties keep the upper row, so no swap happens unless a strictly larger candidate exists.
fn pivot_row(mat: &Matrix, col: usize) -> usize {
    let mut best = col;
    for r in (col + 1)..mat.rows() {
        if mat[(r, col)].abs() > mat[(best, col)].abs() {
            best = r;
        }
    }
    best
}

fn ensure_square(mat: &Matrix) -> Result<usize, MatrixError> {
    if !mat.is_square() {
        return Err(MatrixError::NotSquare {
            rows: mat.rows(),
            cols: mat.cols(),
        });
    }
    Ok(mat.rows())
}

/// Computes the determinant of a square matrix.
///
/// Reduces a working copy to upper-triangular form with partial pivoting, flipping the sign
/// for every row swap. A pivot that is exactly zero after pivoting means the matrix is
/// singular and `0.0` is returned.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for non-square input.
///
/// # Example
///
/// ```
/// use armkin_linalg::{elimination::determinant, Matrix};
///
/// let m = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
/// let det = determinant(&m).unwrap();
/// assert!((det - 6.0).abs() < 1e-12);
/// ```
pub fn determinant(mat: &Matrix) -> Result<f64, MatrixError> {
    let n = ensure_square(mat)?;
    let mut work = mat.clone();
    let mut sign = 1.0;

    for i in 0..n {
        let p = pivot_row(&work, i);
        if work[(p, i)] == 0.0 {
            log::debug!("zero pivot in column {i}, matrix is singular");
            return Ok(0.0);
        }

        if p != i {
            work.swap_rows(i, p);
            sign = -sign;
        }

        let pivot = work[(i, i)];
        for r in (i + 1)..n {
            let factor = work[(r, i)] / pivot;
            for c in i..n {
                let v = work[(i, c)];
                work[(r, c)] -= factor * v;
            }
        }
    }

    let diag: f64 = (0..n).map(|i| work[(i, i)]).product();
    Ok(sign * diag)
}

/// Computes the inverse of a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// # Errors
///
/// Returns [`MatrixError::NotSquare`] for non-square input, [`MatrixError::NonFinite`] when
/// an entry (or the determinant) is NaN or infinite, and [`MatrixError::Singular`] when
/// `|det(A)| < SINGULAR_EPSILON`.
///
/// # Example
///
/// ```
/// use armkin_linalg::{elimination::inverse, Matrix};
///
/// let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
/// let inv = inverse(&m).unwrap();
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(1, 0)] + 0.2).abs() < 1e-12);
///
/// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// assert!(inverse(&singular).is_err());
/// ```
pub fn inverse(mat: &Matrix) -> Result<Matrix, MatrixError> {
    let n = ensure_square(mat)?;
    if let Some(&v) = mat.as_slice().iter().find(|v| !v.is_finite()) {
        log::debug!("refusing to invert matrix with non-finite entry {v}");
        return Err(MatrixError::NonFinite(v));
    }

    // finite entries can still overflow into inf - inf during elimination
    let det = determinant(mat)?;
    if det.is_nan() {
        return Err(MatrixError::NonFinite(det));
    }
    if det.abs() < SINGULAR_EPSILON {
        log::debug!("refusing to invert singular matrix, det = {det:e}");
        return Err(MatrixError::Singular { determinant: det });
    }

    let mut a = mat.clone();
    let mut inv = Matrix::identity(n)?;

    for i in 0..n {
        let p = pivot_row(&a, i);
        if p != i {
            a.swap_rows(i, p);
            inv.swap_rows(i, p);
        }

        let pivot = a[(i, i)];
        for c in 0..n {
            a[(i, c)] /= pivot;
            inv[(i, c)] /= pivot;
        }

        for r in 0..n {
            if r == i {
                continue;
            }
            let factor = a[(r, i)];
            if factor == 0.0 {
                continue;
            }
            for c in 0..n {
                let (av, iv) = (a[(i, c)], inv[(i, c)]);
                a[(r, c)] -= factor * av;
                inv[(r, c)] -= factor * iv;
            }
        }
    }

    Ok(inv)
}

impl Matrix {
    /// See [`determinant`].
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        determinant(self)
    }

    /// See [`inverse`].
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        inverse(self)
    }
}
