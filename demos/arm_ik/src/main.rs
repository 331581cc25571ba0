use std::path::PathBuf;

use argh::FromArgs;
use armkin::kinematics::{ArmConfig, ArmPose, IkSolution, JointAngles, Position, TwoLinkArm};

/// Solves the inverse kinematics of a two-link planar arm for a target position.
///
/// Negative coordinates must follow `--`, e.g. `arm_ik -- -5 3`.
#[derive(Debug, FromArgs)]
struct Args {
    /// target x coordinate
    #[argh(positional)]
    x: f64,

    /// target y coordinate
    #[argh(positional)]
    y: f64,

    /// path to a json file with `link_1` and `link_2`
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// length of the first link, overrides the configuration file
    #[argh(option)]
    link_1: Option<f64>,

    /// length of the second link, overrides the configuration file
    #[argh(option)]
    link_2: Option<f64>,

    /// print the solution as json
    #[argh(switch, short = 'j')]
    json: bool,

    /// show the arm in a rerun viewer
    #[argh(switch, short = 'v')]
    viz: bool,
}

fn load_config(args: &Args) -> Result<ArmConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            log::debug!("reading arm configuration from {}", path.display());
            serde_json::from_str(&std::fs::read_to_string(path)?)?
        }
        None => ArmConfig::default(),
    };
    if let Some(l1) = args.link_1 {
        config.link_1 = l1;
    }
    if let Some(l2) = args.link_2 {
        config.link_2 = l2;
    }
    Ok(config)
}

fn log_arm(
    rec: &rerun::RecordingStream,
    pose: &ArmPose,
    target: Position,
) -> Result<(), Box<dyn std::error::Error>> {
    let joints = [
        [0.0f32, 0.0],
        [pose.elbow.x as f32, pose.elbow.y as f32],
        [pose.hand.x as f32, pose.hand.y as f32],
    ];

    rec.log(
        "arm/links",
        &rerun::LineStrips2D::new(vec![joints]).with_colors([[0, 0, 255]]), // blue
    )?;
    rec.log(
        "arm/joints",
        &rerun::Points2D::new(joints).with_colors([[255, 0, 0]]), // red
    )?;
    rec.log(
        "arm/target",
        &rerun::Points2D::new([[target.x as f32, target.y as f32]]).with_colors([[0, 255, 0]]), // green
    )?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = load_config(&args)?;
    let arm: TwoLinkArm = config.build()?;
    let target = Position::new(args.x, args.y);

    log::info!(
        "computing inverse kinematics for ({}, {}) with links {:?}",
        target.x,
        target.y,
        arm.link_lengths()
    );

    let solution = arm.inverse_kinematics(target);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    }

    let angles: JointAngles = match solution {
        IkSolution::Reachable(angles) => angles,
        IkSolution::Unreachable(reason) => {
            if !args.json {
                println!("Target unreachable: {reason}");
            }
            return Ok(());
        }
    };

    if !args.json {
        println!(
            "Solution found: theta1 = {:.2} deg, theta2 = {:.2} deg",
            angles.theta1, angles.theta2
        );
    }

    if args.viz {
        let pose = arm.forward_kinematics(angles)?;
        let rec = rerun::RecordingStreamBuilder::new("Armkin IK Demo").spawn()?;
        log_arm(&rec, &pose, target)?;
    }

    Ok(())
}
