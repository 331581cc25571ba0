use approx::assert_abs_diff_eq;
use armkin_kinematics::{
    ArmConfig, IkSolution, InverseKinematics, KinematicsError, Position, UnreachableReason,
};

#[test]
fn boundary_is_fully_extended() -> Result<(), KinematicsError> {
    let ik = InverseKinematics::new(10.0, 10.0)?;
    for (x, y) in [(20.0, 0.0), (0.0, 20.0), (-20.0, 0.0), (0.0, -20.0)] {
        let Some(angles) = ik.compute_angles(x, y).angles() else {
            panic!("({x}, {y}) lies exactly on the outer boundary");
        };
        assert_abs_diff_eq!(angles.theta2, 0.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn marginally_outside_is_unreachable() -> Result<(), KinematicsError> {
    let ik = InverseKinematics::new(10.0, 10.0)?;
    let solution = ik.compute_angles(0.0, 20.000001);
    let IkSolution::Unreachable(UnreachableReason::BeyondMaxReach {
        distance,
        max_reach,
    }) = solution
    else {
        panic!("expected BeyondMaxReach, got {solution:?}");
    };
    assert!(distance > max_reach);
    assert_eq!(max_reach, 20.0);
    Ok(())
}

#[test]
fn near_boundary_is_clamped() -> Result<(), KinematicsError> {
    // rounding can push the cosines just past 1 close to the outer boundary
    let arm = ArmConfig {
        link_1: 0.1,
        link_2: 0.2,
    }
    .build()?;
    let (_, max_reach) = arm.reach();
    for k in 0..360 {
        let a = f64::from(k).to_radians();
        let target = Position::new(max_reach * a.cos(), max_reach * a.sin());
        match arm.inverse_kinematics(target) {
            IkSolution::Reachable(angles) => {
                assert!(angles.theta1.is_finite() && angles.theta2.is_finite());
                assert_abs_diff_eq!(angles.theta2, 0.0, epsilon = 1e-3);
            }
            IkSolution::Unreachable(reason) => {
                assert!(matches!(reason, UnreachableReason::BeyondMaxReach { .. }));
            }
        }
    }
    Ok(())
}

#[test]
fn inner_annulus_is_unreachable() -> Result<(), KinematicsError> {
    let ik = InverseKinematics::new(8.0, 2.0)?;
    assert!(matches!(
        ik.compute_angles(1.0, 1.0),
        IkSolution::Unreachable(UnreachableReason::InsideMinReach { .. })
    ));
    assert!(ik.compute_angles(6.5, 0.0).is_reachable());
    Ok(())
}
