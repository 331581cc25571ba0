use serde::{Deserialize, Serialize};

use crate::{
    arm::TwoLinkArm,
    error::{check_link_length, KinematicsError},
};

/// Geometry of a two-link arm.
///
/// Missing fields fall back to [`ArmConfig::default`], the 10 / 10 arm of the reference
/// control program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Length of the first link, shoulder to elbow.
    pub link_1: f64,
    /// Length of the second link, elbow to hand.
    pub link_2: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            link_1: 10.0,
            link_2: 10.0,
        }
    }
}

impl ArmConfig {
    /// Checks that both link lengths are finite and positive.
    pub fn validate(&self) -> Result<(), KinematicsError> {
        check_link_length("link_1", self.link_1)?;
        check_link_length("link_2", self.link_2)?;
        Ok(())
    }

    /// Builds the arm described by this configuration.
    pub fn build(&self) -> Result<TwoLinkArm, KinematicsError> {
        self.validate()?;
        TwoLinkArm::new(self.link_1, self.link_2)
    }
}
