// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Blue, Green, Purple, Red, Yellow};
use clap::{Parser, ValueHint};

use armlab_core::{
    algorithm::{ForwardKinematics, InverseKinematics},
    motion::{Oscillation, Sweep},
    ArmConfig, Config, JointAngles, Point,
};

mod quiz;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Planar arm kinematics toolkit and quiz", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(
        short = 'c',
        long = "config",
        alias = "conf",
        value_name = "FILE",
        value_hint = ValueHint::FilePath
    )]
    config: Option<std::path::PathBuf>,
    /// Link 1 length, overrides the configuration.
    #[arg(long)]
    link1: Option<f64>,
    /// Link 2 length, overrides the configuration.
    #[arg(long)]
    link2: Option<f64>,
    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Forward kinematics for joint angles in degrees.
    Fk {
        /// Joint 1 angle.
        #[arg(allow_hyphen_values = true)]
        theta1: f64,
        /// Joint 2 angle.
        #[arg(allow_hyphen_values = true)]
        theta2: f64,
    },
    /// Inverse kinematics for a target point.
    Ik {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },
    /// Reachability annulus of the arm.
    Reach,
    /// Print the animation frames towards a pose.
    Animate {
        /// Number of frames.
        #[arg(short, long, default_value_t = armlab_core::consts::SWEEP_FRAMES)]
        frames: u32,
        /// Oscillating demonstration motion instead of a sweep.
        #[arg(long)]
        oscillate: bool,
        /// Joint 1 target angle.
        #[arg(allow_hyphen_values = true, default_value_t = 0.0)]
        theta1: f64,
        /// Joint 2 target angle.
        #[arg(allow_hyphen_values = true, default_value_t = 0.0)]
        theta2: f64,
    },
    /// Run the interactive forward kinematics quiz.
    Quiz,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    if args.link1.is_some() || args.link2.is_some() {
        config.arm = ArmConfig::new(
            args.link1.unwrap_or(config.arm.link1()),
            args.link2.unwrap_or(config.arm.link2()),
        )?;
    }

    Ok(config)
}

fn print_forward(fk: &ForwardKinematics, angles: JointAngles) {
    let positions = fk.joint_positions(angles);

    println!("{} {}", Blue.bold().paint("Angles  "), angles);
    println!(
        "{} ({:.4}, {:.4})",
        Blue.bold().paint("Joint   "),
        positions.joint.x,
        positions.joint.y
    );
    println!(
        "{} ({:.4}, {:.4})",
        Green.bold().paint("Effector"),
        positions.end_effector.x,
        positions.end_effector.y
    );
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = load_config(&args)?;

    log::trace!("{:#?}", config);
    log::debug!("Arm {}", config.arm);

    match args.command {
        Command::Fk { theta1, theta2 } => {
            let fk = ForwardKinematics::from(&config.arm);
            print_forward(&fk, JointAngles::new(theta1, theta2));
        }
        Command::Ik { x, y } => {
            let ik = InverseKinematics::from(&config.arm);

            match ik.solve(Point::new(x, y)) {
                Ok(angles) => {
                    println!("{} {}", Green.bold().paint("Solution"), angles);
                }
                Err(unreachable) => {
                    println!(
                        "{} distance {:.4} outside reach [{:.4}, {:.4}]",
                        Red.bold().paint("Unreachable"),
                        unreachable.distance,
                        unreachable.min_reach,
                        unreachable.max_reach
                    );
                }
            }
        }
        Command::Reach => {
            let reach = config.arm.reach();

            println!("{} {:.4}", Yellow.bold().paint("Minimum reach"), reach.min);
            println!("{} {:.4}", Yellow.bold().paint("Maximum reach"), reach.max);
        }
        Command::Animate {
            frames,
            oscillate,
            theta1,
            theta2,
        } => {
            let fk = ForwardKinematics::from(&config.arm);

            let sequence: Box<dyn Iterator<Item = JointAngles>> = if oscillate {
                Box::new(Oscillation::new(frames))
            } else {
                Box::new(Sweep::new(JointAngles::new(theta1, theta2), frames))
            };

            for (frame, angles) in sequence.enumerate() {
                let effector = fk.solve(angles);

                println!(
                    "{} {} » ({:.4}, {:.4})",
                    Purple.paint(format!("[frame {:>4}]", frame + 1)),
                    angles,
                    effector.x,
                    effector.y
                );
            }
        }
        Command::Quiz => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();

            quiz::run(&config, stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
