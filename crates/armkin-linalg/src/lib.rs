#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Armkin Linalg
//!
//! A small, dependency-light dense matrix kernel: construction, addition, scaling,
//! multiplication, transposition, a Gaussian elimination determinant and a Gauss-Jordan
//! inverse. All values are `f64`; results of the elimination routines are approximate and
//! should be compared with a tolerance.
//!
//! ## Example
//!
//! ```rust
//! use armkin_linalg::Matrix;
//!
//! let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
//! let a_inv = a.inverse().unwrap();
//! let eye = a.matmul(&a_inv).unwrap();
//! assert!(eye.max_abs_diff(&Matrix::identity(2).unwrap()).unwrap() < 1e-12);
//! ```

/// Error types for the linalg module.
pub mod error;

/// Determinant and inverse by elimination.
pub mod elimination;

/// The dense matrix type.
pub mod matrix;

/// Element-wise and product operations.
pub mod ops;

/// Planar rotation helpers.
pub mod transforms;

pub use crate::error::MatrixError;
pub use crate::matrix::Matrix;
