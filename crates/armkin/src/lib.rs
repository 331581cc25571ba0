#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use armkin_kinematics as kinematics;

#[doc(inline)]
pub use armkin_linalg as linalg;
