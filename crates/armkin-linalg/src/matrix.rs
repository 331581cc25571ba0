use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// A dense, row-major matrix of `f64` values.
///
/// The shape is fixed at construction and is never empty: every constructor rejects a zero
/// dimension and ragged input, so the arithmetic in [`crate::ops`] and
/// [`crate::elimination`] only ever has to compare shapes.
///
/// Operations never mutate their operands; each one allocates and returns a new matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Number of elements of a `rows x cols` matrix, rejecting empty and overflowing shapes.
fn checked_numel(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    match rows.checked_mul(cols) {
        Some(numel) if numel > 0 => Ok(numel),
        _ => Err(MatrixError::InvalidShape { rows, cols }),
    }
}

impl Matrix {
    /// Creates a matrix of the given shape filled with zeros.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows, at least one.
    /// * `cols` - The number of columns, at least one.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use armkin_linalg::Matrix;
    ///
    /// let m = Matrix::zeros(2, 3).unwrap();
    /// assert_eq!(m.shape(), [2, 3]);
    /// assert!(m.as_slice().iter().all(|&v| v == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_elem(rows, cols, 0.0)
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if `n` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use armkin_linalg::Matrix;
    ///
    /// let eye = Matrix::identity(3).unwrap();
    /// assert_eq!(eye[(1, 1)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut mat = Self::zeros(n, n)?;
        for i in 0..n {
            mat[(i, i)] = 1.0;
        }
        Ok(mat)
    }

    /// Creates a matrix of the given shape with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if either dimension is zero or `rows * cols`
    /// overflows.
    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Result<Self, MatrixError> {
        let numel = checked_numel(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; numel],
        })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - The rows of the matrix. All rows must have the same, non-zero length.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] for an empty input or empty rows and
    /// [`MatrixError::RaggedRows`] when a row length differs from the first one.
    ///
    /// # Example
    ///
    /// ```
    /// use armkin_linalg::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::InvalidShape {
                rows: num_rows,
                cols: num_cols,
            });
        }

        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: num_cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            data,
        })
    }

    /// Creates a matrix from a shape and a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] if either dimension is zero or `rows * cols`
    /// overflows, and [`MatrixError::InvalidDataLength`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<f64>) -> Result<Self, MatrixError> {
        let [rows, cols] = shape;
        let numel = checked_numel(rows, cols)?;
        if numel != data.len() {
            return Err(MatrixError::InvalidDataLength {
                expected: numel,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The shape as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the matrix into a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// The largest absolute elementwise difference to `other`.
    ///
    /// Returns `None` when the shapes differ.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs())),
        )
    }

    // caller guarantees a non-empty shape matching `data`
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && data.len() == rows * cols);
        Self { rows, cols, data }
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(mat: Matrix) -> Self {
        mat.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
