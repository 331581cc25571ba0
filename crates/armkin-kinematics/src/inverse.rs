use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{check_link_length, KinematicsError},
    types::{JointAngles, Position},
};

/// Why a target cannot be reached by the arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UnreachableReason {
    /// The target is farther from the base than `l1 + l2`.
    BeyondMaxReach {
        /// Distance from the base to the target.
        distance: f64,
        /// `l1 + l2`
        max_reach: f64,
    },
    /// The target is closer to the base than `|l1 - l2|`.
    InsideMinReach {
        /// Distance from the base to the target.
        distance: f64,
        /// `|l1 - l2|`
        min_reach: f64,
    },
    /// The geometry has no finite solution, e.g. a target exactly at the base or a
    /// non-finite coordinate.
    Degenerate,
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeyondMaxReach {
                distance,
                max_reach,
            } => write!(
                f,
                "target at distance {distance} is beyond the maximum reach {max_reach}"
            ),
            Self::InsideMinReach {
                distance,
                min_reach,
            } => write!(
                f,
                "target at distance {distance} is inside the minimum reach {min_reach}"
            ),
            Self::Degenerate => write!(f, "target has no finite joint solution"),
        }
    }
}

/// The outcome of an inverse kinematics query.
///
/// An unreachable target is an expected result rather than an error, so it is one of the
/// two variants instead of an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IkSolution {
    /// Joint angles in degrees that place the hand on the target.
    Reachable(JointAngles),
    /// The target cannot be reached.
    Unreachable(UnreachableReason),
}

impl IkSolution {
    /// Whether a solution was found.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable(_))
    }

    /// The joint angles, if the target is reachable.
    pub fn angles(&self) -> Option<JointAngles> {
        match self {
            Self::Reachable(angles) => Some(*angles),
            Self::Unreachable(_) => None,
        }
    }
}

/// `acos` of `v` clamped to `[-1, 1]`, absorbing rounding overshoot such as `1.0000000001`.
#[inline]
fn clamped_acos(v: f64) -> f64 {
    v.clamp(-1.0, 1.0).acos()
}

/// Analytic inverse kinematics of a two-link planar arm.
///
/// The solver is single-valued: it always returns the configuration with a non-negative
/// elbow angle, the branch produced by [`crate::ForwardKinematics`] for `theta2` in
/// `[0, 180]` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseKinematics {
    l1: f64,
    l2: f64,
}

impl InverseKinematics {
    /// Creates an inverse kinematics solver for the given link lengths.
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

    /// The annulus of reachable distances as `(|l1 - l2|, l1 + l2)`.
    pub fn reach(&self) -> (f64, f64) {
        ((self.l1 - self.l2).abs(), self.l1 + self.l2)
    }

    /// Computes the joint angles, in degrees, that place the hand at `(x, y)`.
    ///
    /// # Example
    ///
    /// ```
    /// use armkin_kinematics::{IkSolution, InverseKinematics};
    ///
    /// let ik = InverseKinematics::new(10.0, 10.0).unwrap();
    /// let angles = ik.compute_angles(10.0, 10.0).angles().unwrap();
    /// assert!(angles.theta1.abs() < 1e-9);
    /// assert!((angles.theta2 - 90.0).abs() < 1e-9);
    ///
    /// assert!(matches!(ik.compute_angles(30.0, 0.0), IkSolution::Unreachable(_)));
    /// ```
    pub fn compute_angles(&self, x: f64, y: f64) -> IkSolution {
        let solution = self.solve(x, y);
        if let IkSolution::Unreachable(reason) = &solution {
            log::debug!("target ({x}, {y}) unreachable: {reason}");
        }
        solution
    }

    /// Same as [`Self::compute_angles`] for a [`Position`].
    pub fn solve_position(&self, target: Position) -> IkSolution {
        self.compute_angles(target.x, target.y)
    }

    fn solve(&self, x: f64, y: f64) -> IkSolution {
        let (l1, l2) = (self.l1, self.l2);
        if !x.is_finite() || !y.is_finite() {
            return IkSolution::Unreachable(UnreachableReason::Degenerate);
        }

        let distance = x.hypot(y);
        let (min_reach, max_reach) = self.reach();
        if distance > max_reach {
            return IkSolution::Unreachable(UnreachableReason::BeyondMaxReach {
                distance,
                max_reach,
            });
        }
        // the annulus inner bound only exists for unequal links
        if distance < min_reach {
            return IkSolution::Unreachable(UnreachableReason::InsideMinReach {
                distance,
                min_reach,
            });
        }

        // squares of large (or tiny) lengths leave the f64 range, so the triangle is solved
        // with every side divided by a power of two close to the longest link
        let scale = power_of_two_below(l1.max(l2));
        let (a, b, r) = (l1 / scale, l2 / scale, distance / scale);

        // law of cosines at the elbow, measured from the straight arm
        let cos_gamma = (a * a + b * b - r * r) / (2.0 * a * b);
        let theta2 = PI - clamped_acos(cos_gamma);

        // shoulder: direction of the target minus the interior angle at the base
        let phi = y.atan2(x);
        let cos_alpha = (a * a + r * r - b * b) / (2.0 * a * r);
        let theta1 = phi - clamped_acos(cos_alpha);

        if !theta1.is_finite() || !theta2.is_finite() {
            return IkSolution::Unreachable(UnreachableReason::Degenerate);
        }

        log::trace!("ik ({x}, {y}) -> theta1 = {theta1} rad, theta2 = {theta2} rad");

        IkSolution::Reachable(JointAngles::new(theta1.to_degrees(), theta2.to_degrees()))
    }
}

/// Largest power of two not above `v`, floored at the smallest normal `f64`.
///
/// Dividing by a power of two only shifts the exponent, so rescaled lengths are exact.
fn power_of_two_below(v: f64) -> f64 {
    const EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;
    f64::from_bits(v.to_bits() & EXPONENT_MASK).max(f64::MIN_POSITIVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamped_acos() {
        assert_eq!(clamped_acos(1.0000000001), 0.0);
        assert_relative_eq!(clamped_acos(-1.0000000001), PI);
        assert_relative_eq!(clamped_acos(0.0), PI / 2.0);
    }

    #[test]
    fn test_concrete_target() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(10.0, 10.0)?;
        let IkSolution::Reachable(angles) = ik.compute_angles(10.0, 10.0) else {
            panic!("(10, 10) must be reachable");
        };
        assert_relative_eq!(angles.theta1, 0.0, epsilon = 1e-9);
        assert_relative_eq!(angles.theta2, 90.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_fully_extended_boundary() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(10.0, 10.0)?;
        let angles = ik.compute_angles(20.0, 0.0).angles();
        let Some(angles) = angles else {
            panic!("target at exactly l1 + l2 must be reachable");
        };
        assert_relative_eq!(angles.theta1, 0.0, epsilon = 1e-9);
        assert_relative_eq!(angles.theta2, 0.0, epsilon = 1e-9);

        let outside = ik.compute_angles(20.0 + 1e-9, 0.0);
        assert!(matches!(
            outside,
            IkSolution::Unreachable(UnreachableReason::BeyondMaxReach { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_beyond_max_reach_reports_distances() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(3.0, 1.0)?;
        assert_eq!(
            ik.compute_angles(0.0, -5.0),
            IkSolution::Unreachable(UnreachableReason::BeyondMaxReach {
                distance: 5.0,
                max_reach: 4.0
            })
        );
        Ok(())
    }

    #[test]
    fn test_inside_min_reach() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(10.0, 4.0)?;
        assert_eq!(ik.reach(), (6.0, 14.0));
        assert_eq!(
            ik.compute_angles(3.0, 4.0),
            IkSolution::Unreachable(UnreachableReason::InsideMinReach {
                distance: 5.0,
                min_reach: 6.0
            })
        );
        // exactly on the inner bound: folded arm pointing at the target
        let angles = ik.compute_angles(6.0, 0.0).angles();
        let Some(angles) = angles else {
            panic!("target at exactly |l1 - l2| must be reachable");
        };
        assert_relative_eq!(angles.theta1, 0.0, epsilon = 1e-6);
        assert_relative_eq!(angles.theta2, 180.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_power_of_two_below() {
        assert_eq!(power_of_two_below(1.0), 1.0);
        assert_eq!(power_of_two_below(10.0), 8.0);
        assert_eq!(power_of_two_below(0.3), 0.25);
        assert_eq!(power_of_two_below(1e-320), f64::MIN_POSITIVE);
    }

    #[test]
    fn test_extreme_link_lengths() -> Result<(), KinematicsError> {
        // the hand position of (30, 45) deg, written in units of the link length
        let (t1, t2) = (30f64.to_radians(), 75f64.to_radians());
        let (ux, uy) = (t1.cos() + t2.cos(), t1.sin() + t2.sin());

        for length in [1e200, 1e300, 1e-200] {
            let ik = InverseKinematics::new(length, length)?;
            let IkSolution::Reachable(angles) = ik.compute_angles(ux * length, uy * length) else {
                panic!("hand of a {length:e} arm must be reachable");
            };
            assert_relative_eq!(angles.theta1, 30.0, epsilon = 1e-9);
            assert_relative_eq!(angles.theta2, 45.0, epsilon = 1e-9);
        }

        let ik = InverseKinematics::new(1e200, 1e200)?;
        assert!(matches!(
            ik.compute_angles(3e200, 0.0),
            IkSolution::Unreachable(UnreachableReason::BeyondMaxReach { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_target_at_base_is_degenerate() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(5.0, 5.0)?;
        assert_eq!(
            ik.compute_angles(0.0, 0.0),
            IkSolution::Unreachable(UnreachableReason::Degenerate)
        );
        Ok(())
    }

    #[test]
    fn test_non_finite_target() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(5.0, 5.0)?;
        for (x, y) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            assert_eq!(
                ik.compute_angles(x, y),
                IkSolution::Unreachable(UnreachableReason::Degenerate)
            );
        }
        Ok(())
    }

    #[test]
    fn test_invalid_link_lengths() {
        assert_eq!(
            InverseKinematics::new(1.0, 0.0),
            Err(KinematicsError::InvalidLinkLength {
                name: "l2",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_elbow_branch_is_non_negative() -> Result<(), KinematicsError> {
        let ik = InverseKinematics::new(2.0, 1.5)?;
        for (x, y) in [(1.0, 2.0), (-2.5, 0.3), (0.7, -1.9), (-1.0, -1.0)] {
            let Some(angles) = ik.compute_angles(x, y).angles() else {
                panic!("({x}, {y}) must be reachable");
            };
            assert!((0.0..=180.0).contains(&angles.theta2));
        }
        Ok(())
    }

    #[test]
    fn test_solution_helpers() {
        let reachable = IkSolution::Reachable(JointAngles::new(1.0, 2.0));
        assert!(reachable.is_reachable());
        assert_eq!(reachable.angles(), Some(JointAngles::new(1.0, 2.0)));

        let unreachable = IkSolution::Unreachable(UnreachableReason::Degenerate);
        assert!(!unreachable.is_reachable());
        assert_eq!(unreachable.angles(), None);
        assert_eq!(
            unreachable.to_string(),
            "target has no finite joint solution"
        );
    }
}
