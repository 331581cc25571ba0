use armkin_linalg::MatrixError;
use thiserror::Error;

/// An error type for the kinematics module.
#[derive(Error, Debug, PartialEq)]
pub enum KinematicsError {
    /// A link length was zero, negative or not finite.
    #[error("Invalid link length: {name} must be finite and positive, got {value}")]
    InvalidLinkLength {
        /// Which link was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// An error from the matrix kernel.
    #[error(transparent)]
    Linalg(#[from] MatrixError),
}

pub(crate) fn check_link_length(name: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(KinematicsError::InvalidLinkLength { name, value })
    }
}
