use thiserror::Error;

/// An error type for matrix construction and arithmetic.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// A matrix needs at least one row and one column, and its element count must fit in `usize`.
    #[error("Invalid shape: {rows}x{cols} is empty or has more elements than fit in memory")]
    InvalidShape {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// A row does not have the same length as the first row.
    #[error("Ragged rows: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// The flat data buffer does not match the requested shape.
    #[error("Data length mismatch: expected {expected} elements for shape, but got {actual}")]
    InvalidDataLength {
        /// Number of elements implied by the shape
        expected: usize,
        /// Number of elements provided
        actual: usize,
    },

    /// The operand shapes are incompatible for the requested operation.
    #[error("Dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        /// Name of the operation
        op: &'static str,
        /// Shape of the left operand as `[rows, cols]`
        left: [usize; 2],
        /// Shape of the right operand as `[rows, cols]`
        right: [usize; 2],
    },

    /// The operation requires a square matrix.
    #[error("Matrix is not square: got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The matrix has no inverse.
    #[error("Matrix is singular and not invertible (determinant = {determinant:e})")]
    Singular {
        /// The determinant that fell below the singularity threshold
        determinant: f64,
    },

    /// An input value was NaN or infinite.
    #[error("Non-finite value: {0}")]
    NonFinite(f64),
}
