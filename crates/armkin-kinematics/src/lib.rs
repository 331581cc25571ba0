#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Armkin Kinematics
//!
//! - [`ForwardKinematics`] maps joint angles to elbow and hand positions by composing one
//!   homogeneous transform per joint.
//! - [`InverseKinematics`] recovers joint angles for a target position with the law of
//!   cosines, returning [`IkSolution::Unreachable`] outside the reachable annulus.
//!
//! All angles are in degrees.
//!
//! ## Example
//!
//! ```rust
//! use armkin_kinematics::{JointAngles, TwoLinkArm};
//!
//! let arm = TwoLinkArm::new(10.0, 10.0).unwrap();
//! let pose = arm.forward_kinematics(JointAngles::new(30.0, 45.0)).unwrap();
//! let angles = arm.inverse_kinematics(pose.hand).angles().unwrap();
//! assert!((angles.theta1 - 30.0).abs() < 1e-6);
//! assert!((angles.theta2 - 45.0).abs() < 1e-6);
//! ```

mod arm;
pub use arm::TwoLinkArm;

/// Arm geometry configuration.
pub mod config;

/// Error types for the kinematics module.
pub mod error;

mod forward;
pub use forward::ForwardKinematics;

mod inverse;
pub use inverse::{IkSolution, InverseKinematics, UnreachableReason};

/// Homogeneous transforms of revolute joints.
pub mod transform;

/// Positions, joint angles and poses.
pub mod types;

pub use crate::config::ArmConfig;
pub use crate::error::KinematicsError;
pub use crate::types::{ArmPose, JointAngles, Position};
