use crate::{
    error::KinematicsError,
    forward::ForwardKinematics,
    inverse::{IkSolution, InverseKinematics},
    types::{ArmPose, JointAngles, Position},
};

/// A two-link planar arm with both kinematic directions bound to the same geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLinkArm {
    forward: ForwardKinematics,
    inverse: InverseKinematics,
}

impl TwoLinkArm {
    /// Creates an arm with link lengths `l1` (shoulder to elbow) and `l2` (elbow to hand).
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::InvalidLinkLength`] unless both lengths are finite and
    /// positive.
    pub fn new(l1: f64, l2: f64) -> Result<Self, KinematicsError> {
        Ok(Self {
            forward: ForwardKinematics::new(l1, l2)?,
            inverse: InverseKinematics::new(l1, l2)?,
        })
    }

    /// The link lengths as `(l1, l2)`.
    pub fn link_lengths(&self) -> (f64, f64) {
        self.forward.link_lengths()
    }

    /// The reachable distances from the base as `(min, max)`.
    pub fn reach(&self) -> (f64, f64) {
        self.inverse.reach()
    }

    /// Elbow and hand positions for the given joint angles.
    pub fn forward_kinematics(&self, angles: JointAngles) -> Result<ArmPose, KinematicsError> {
        self.forward.compute(angles.theta1, angles.theta2)
    }

    /// Joint angles that place the hand at `target`.
    pub fn inverse_kinematics(&self, target: Position) -> IkSolution {
        self.inverse.solve_position(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_trip() -> Result<(), KinematicsError> {
        let arm = TwoLinkArm::new(4.0, 3.0)?;
        let angles = JointAngles::new(25.0, 60.0);
        let pose = arm.forward_kinematics(angles)?;
        let Some(solved) = arm.inverse_kinematics(pose.hand).angles() else {
            panic!("hand position must be reachable");
        };
        assert_relative_eq!(solved.theta1, angles.theta1, epsilon = 1e-9);
        assert_relative_eq!(solved.theta2, angles.theta2, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_reach() -> Result<(), KinematicsError> {
        let arm = TwoLinkArm::new(4.0, 3.0)?;
        assert_eq!(arm.link_lengths(), (4.0, 3.0));
        assert_eq!(arm.reach(), (1.0, 7.0));
        Ok(())
    }
}
