use crate::{error::MatrixError, matrix::Matrix};

/// Creates the 2x2 rotation matrix `[[cos, -sin], [sin, cos]]` for an angle in degrees.
///
/// # Errors
///
/// Returns [`MatrixError::NonFinite`] if the angle is NaN or infinite.
///
/// # Example
///
/// ```
/// use armkin_linalg::transforms::rotation_2d;
///
/// let r = rotation_2d(90.0).unwrap();
/// assert!(r[(0, 0)].abs() < 1e-12);
/// assert!((r[(1, 0)] - 1.0).abs() < 1e-12);
/// ```
pub fn rotation_2d(angle_deg: f64) -> Result<Matrix, MatrixError> {
    if !angle_deg.is_finite() {
        return Err(MatrixError::NonFinite(angle_deg));
    }
    let (s, c) = angle_deg.to_radians().sin_cos();
    Matrix::from_rows(&[[c, -s], [s, c]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_zero_is_identity() -> Result<(), MatrixError> {
        assert_eq!(rotation_2d(0.0)?, Matrix::identity(2)?);
        Ok(())
    }

    #[test]
    fn test_rotation_rotates_unit_x() -> Result<(), MatrixError> {
        let r = rotation_2d(30.0)?;
        let x = Matrix::from_rows(&[[1.0], [0.0]])?;
        let y = r.matmul(&x)?;
        assert_relative_eq!(y[(0, 0)], 3f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_relative_eq!(y[(1, 0)], 0.5, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_rotation_is_orthonormal() -> Result<(), MatrixError> {
        let r = rotation_2d(-127.5)?;
        assert_relative_eq!(r.determinant()?, 1.0, epsilon = 1e-12);
        let inv = r.inverse()?;
        let rt = r.transpose();
        assert!(inv.max_abs_diff(&rt).is_some_and(|d| d < 1e-12));
        Ok(())
    }

    #[test]
    fn test_rotation_non_finite() {
        assert!(matches!(
            rotation_2d(f64::NAN),
            Err(MatrixError::NonFinite(_))
        ));
        assert_eq!(
            rotation_2d(f64::INFINITY),
            Err(MatrixError::NonFinite(f64::INFINITY))
        );
    }
}
