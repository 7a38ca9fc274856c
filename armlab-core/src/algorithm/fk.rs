use crate::geometry::{ArmConfig, JointAngles, Point};

/// Positions of every joint along the chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointPositions {
    /// Base of the arm, always the origin.
    pub base: Point,
    /// Elbow joint at the end of link 1.
    pub joint: Point,
    /// End effector at the end of link 2.
    pub end_effector: Point,
}

impl JointPositions {
    /// Length of both segments of the chain.
    pub fn link_lengths(&self) -> (f64, f64) {
        (
            nalgebra::distance(&self.base, &self.joint),
            nalgebra::distance(&self.joint, &self.end_effector),
        )
    }
}

impl std::fmt::Display for JointPositions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Base: ({:.4}, {:.4}) Joint: ({:.4}, {:.4}) Effector: ({:.4}, {:.4})",
            self.base.x,
            self.base.y,
            self.joint.x,
            self.joint.y,
            self.end_effector.x,
            self.end_effector.y
        )
    }
}

/// Forward kinematics of a two-link planar arm.
pub struct ForwardKinematics {
    l1: f64,
    l2: f64,
}

impl ForwardKinematics {
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// End effector position for the given joint angles.
    pub fn solve(&self, angles: JointAngles) -> Point {
        self.joint_positions(angles).end_effector
    }

    /// Position of the base, elbow and end effector.
    pub fn joint_positions(&self, angles: JointAngles) -> JointPositions {
        let (theta_1, theta_2) = angles.to_radians();

        let joint = Point::new(self.l1 * theta_1.cos(), self.l1 * theta_1.sin());
        let end_effector = Point::new(
            joint.x + self.l2 * (theta_1 + theta_2).cos(),
            joint.y + self.l2 * (theta_1 + theta_2).sin(),
        );

        JointPositions {
            base: Point::origin(),
            joint,
            end_effector,
        }
    }
}

impl From<&ArmConfig> for ForwardKinematics {
    fn from(arm: &ArmConfig) -> Self {
        Self::new(arm.link1(), arm.link2())
    }
}

/// End effector position for angles in degrees and the given link lengths.
pub fn forward_kinematics(theta1: f64, theta2: f64, l1: f64, l2: f64) -> Point {
    ForwardKinematics::new(l1, l2).solve(JointAngles::new(theta1, theta2))
}

/// Joint positions for angles in degrees and the given link lengths.
pub fn joint_positions(theta1: f64, theta2: f64, l1: f64, l2: f64) -> JointPositions {
    ForwardKinematics::new(l1, l2).joint_positions(JointAngles::new(theta1, theta2))
}
