use serde::{Deserialize, Serialize};

/// A point in the plane of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the arm base at the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Shoulder and elbow angles in degrees.
///
/// `theta1` is measured from the x axis, `theta2` relative to the first link, so
/// `theta2 == 0` is a fully extended arm.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    /// Shoulder angle in degrees.
    pub theta1: f64,
    /// Elbow angle in degrees.
    pub theta2: f64,
}

impl JointAngles {
    /// Creates a new pair of joint angles.
    pub const fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }
}

/// Positions of the elbow and hand produced by forward kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmPose {
    /// The end of the first link.
    pub elbow: Position,
    /// The end of the second link, i.e. the end effector.
    pub hand: Position,
}
