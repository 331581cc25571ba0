use crate::{
    error::{check_link_length, KinematicsError},
    transform::{homogeneous_transform, translation},
    types::ArmPose,
};

/// Forward kinematics of a two-link planar arm.
///
/// Composes one homogeneous transform per joint with the matrix kernel and reads the
/// elbow and hand positions from the translation columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardKinematics {
    l1: f64,
    l2: f64,
}

impl ForwardKinematics {
    /// Creates a forward kinematics engine for the given link lengths.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::InvalidLinkLength`] unless both lengths are finite and
    /// positive.
    pub fn new(l1: f64, l2: f64) -> Result<Self, KinematicsError> {
        Ok(Self {
            l1: check_link_length("l1", l1)?,
            l2: check_link_length("l2", l2)?,
        })
    }

    /// The link lengths as `(l1, l2)`.
    pub fn link_lengths(&self) -> (f64, f64) {
        (self.l1, self.l2)
    }

    /// Computes the elbow and hand positions for joint angles given in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::Linalg`] if an angle is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use armkin_kinematics::ForwardKinematics;
    ///
    /// let fk = ForwardKinematics::new(10.0, 10.0).unwrap();
    /// let pose = fk.compute(0.0, 90.0).unwrap();
    /// assert!((pose.elbow.x - 10.0).abs() < 1e-9);
    /// assert!((pose.hand.y - 10.0).abs() < 1e-9);
    /// ```
    pub fn compute(&self, theta1: f64, theta2: f64) -> Result<ArmPose, KinematicsError> {
        // base -> elbow
        let t01 = homogeneous_transform(theta1, self.l1)?;
        // elbow -> hand
        let t12 = homogeneous_transform(theta2, self.l2)?;
        let t02 = t01.matmul(&t12)?;

        Ok(ArmPose {
            elbow: translation(&t01),
            hand: translation(&t02),
        })
    }
}
