use crate::{error::MatrixError, matrix::Matrix};

/// Element-wise sum of two matrices of identical shape.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
///
/// # Example
///
/// ```
/// use armkin_linalg::{ops::add, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[10.0, 20.0], [30.0, 40.0]]).unwrap();
/// let c = add(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
/// ```
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op: "add",
            left: a.shape(),
            right: b.shape(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x + y)
        .collect();
    Matrix::from_shape_vec(a.shape(), data)
}

/// Multiplies every element of `m` by `scalar`.
pub fn scale(m: &Matrix, scalar: f64) -> Matrix {
    let mut out = m.clone();
    out.as_mut_slice().iter_mut().for_each(|v| *v *= scalar);
    out
}

/// Standard matrix product `a * b`.
///
/// The result has shape `rows(a) x cols(b)`.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] unless `cols(a) == rows(b)`.
///
/// # Example
///
/// ```
/// use armkin_linalg::{ops::matmul, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = matmul(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
/// ```
pub fn matmul(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            op: "matmul",
            left: a.shape(),
            right: b.shape(),
        });
    }

    let mut out = Matrix::zeros(a.rows(), b.cols())?;
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut acc = 0.0;
            for k in 0..a.cols() {
                acc += a[(i, k)] * b[(k, j)];
            }
            out[(i, j)] = acc;
        }
    }
    Ok(out)
}

/// Returns the transpose of `m`, i.e. `out[(j, i)] == m[(i, j)]`.
pub fn transpose(m: &Matrix) -> Matrix {
    let mut data = Vec::with_capacity(m.rows() * m.cols());
    for j in 0..m.cols() {
        for i in 0..m.rows() {
            data.push(m[(i, j)]);
        }
    }
    Matrix::from_raw(m.cols(), m.rows(), data)
}

impl Matrix {
    /// See [`add`].
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        add(self, other)
    }

    /// See [`scale`].
    pub fn scale(&self, scalar: f64) -> Matrix {
        scale(self, scalar)
    }

    /// See [`matmul`].
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        matmul(self, other)
    }

    /// See [`transpose`].
    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }
}
