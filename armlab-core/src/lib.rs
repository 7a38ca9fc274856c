// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// The `armlab-core` library models a two-link planar robot arm.
///
/// It provides forward kinematics, an analytic inverse kinematics solver
/// with reachability classification, an answer evaluator with tolerance and
/// a staged quiz built on top of them. Every computation is synchronous and
/// free of side effects other than logging. Rendering and input handling are
/// left to the caller.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod geometry;
pub mod motion;
pub mod quiz;

pub use self::config::{from_file, Config, QuizConfig};
pub use self::error::{ConfigError, InputError, QuizError};
pub use self::geometry::{ArmConfig, JointAngles, Point, Reach};

pub use nalgebra;

/// Armlab module containing various constants.
pub mod consts {
    /// Armlab version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Quiz arm link 1 length in meters.
    pub const QUIZ_LINK1: f64 = 1.0;

    /// Quiz arm link 2 length in meters.
    pub const QUIZ_LINK2: f64 = 0.8;

    /// Visualizer arm link 1 length in pixels.
    pub const VISUALIZER_LINK1: f64 = 150.0;

    /// Visualizer arm link 2 length in pixels.
    pub const VISUALIZER_LINK2: f64 = 120.0;

    /// Fixed quiz questions as `(theta1, theta2)` in degrees.
    pub const QUIZ_QUESTIONS: [(f64, f64); 3] = [(45.0, 30.0), (-30.0, 60.0), (90.0, -45.0)];

    /// Quiz answer tolerance in centimeters.
    pub const DEFAULT_TOLERANCE: f64 = 15.0;

    /// Meters to centimeters.
    pub const DEFAULT_UNIT_SCALE: f64 = 100.0;

    /// Number of frames of the sweep animation.
    pub const SWEEP_FRAMES: u32 = 30;
}
