use armkin_linalg::{transforms::rotation_2d, Matrix};

use crate::{error::KinematicsError, types::Position};

/// Builds the 3x3 homogeneous transform of one revolute joint followed by its link.
///
/// The transform rotates by `theta_deg` and then translates `length` along the rotated
/// x axis:
///
/// ```text
/// | cos  -sin  length * cos |
/// | sin   cos  length * sin |
/// |  0     0        1       |
/// ```
///
/// # Errors
///
/// Returns [`KinematicsError::Linalg`] if the angle is not finite.
pub fn homogeneous_transform(theta_deg: f64, length: f64) -> Result<Matrix, KinematicsError> {
    let rot = rotation_2d(theta_deg)?;
    let (c, s) = (rot[(0, 0)], rot[(1, 0)]);
    let mat = Matrix::from_rows(&[
        [c, rot[(0, 1)], length * c],
        [s, rot[(1, 1)], length * s],
        [0.0, 0.0, 1.0],
    ])?;
    Ok(mat)
}

/// The translation column of a homogeneous transform as a position.
pub fn translation(transform: &Matrix) -> Position {
    Position::new(transform[(0, 2)], transform[(1, 2)])
}
