use std::f64::consts;

use crate::error::ConfigError;

/// Point in the plane of the arm.
///
/// The unit follows the link lengths, meters for the quiz arm and pixels for
/// the visualizer arm.
pub type Point = nalgebra::Point2<f64>;

/// Relative slack on the reach boundaries.
///
/// Forward kinematics at a fully folded or fully extended pose lands a few
/// ULPs off the exact boundary. This absorbs that drift and nothing more.
pub const REACH_TOLERANCE: f64 = 1e-9;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (consts::PI / 180.0)
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * (180.0 / consts::PI)
}

/// Link lengths of a two-link planar arm.
///
/// Both lengths are strictly positive and finite. The invariant is enforced
/// here so the kinematic functions never have to check it per call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ArmConfig {
    link1: f64,
    link2: f64,
}

impl ArmConfig {
    /// Construct a new arm configuration.
    pub fn new(link1: f64, link2: f64) -> Result<Self, ConfigError> {
        for (link, length) in [(1, link1), (2, link2)] {
            if !length.is_finite() || length <= 0.0 {
                return Err(ConfigError::InvalidLength { link, length });
            }
        }

        Ok(Self { link1, link2 })
    }

    /// Arm used by the quiz, lengths in meters.
    pub fn quiz() -> Self {
        Self {
            link1: crate::consts::QUIZ_LINK1,
            link2: crate::consts::QUIZ_LINK2,
        }
    }

    /// Arm used by the visualizer, lengths in pixels.
    pub fn visualizer() -> Self {
        Self {
            link1: crate::consts::VISUALIZER_LINK1,
            link2: crate::consts::VISUALIZER_LINK2,
        }
    }

    #[inline]
    pub fn link1(&self) -> f64 {
        self.link1
    }

    #[inline]
    pub fn link2(&self) -> f64 {
        self.link2
    }

    /// Reachability annulus of this arm.
    #[inline]
    pub fn reach(&self) -> Reach {
        reachability(self.link1, self.link2)
    }
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self::quiz()
    }
}

impl<'de> serde::Deserialize<'de> for ArmConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct ArmLengths {
            link1: f64,
            link2: f64,
        }

        let lengths = ArmLengths::deserialize(deserializer)?;
        Self::new(lengths.link1, lengths.link2).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ArmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L1: {:.3} L2: {:.3}", self.link1, self.link2)
    }
}

/// Joint angles in degrees.
///
/// `theta1` is measured from the positive X-axis at the base, `theta2`
/// relative to the direction of link 1. Angles are not range restricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    pub fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    /// Both angles in radians.
    #[inline]
    pub fn to_radians(self) -> (f64, f64) {
        (deg_to_rad(self.theta1), deg_to_rad(self.theta2))
    }

    /// Construct from angles in radians.
    #[inline]
    pub fn from_radians(theta1: f64, theta2: f64) -> Self {
        Self {
            theta1: rad_to_deg(theta1),
            theta2: rad_to_deg(theta2),
        }
    }
}

impl From<(f64, f64)> for JointAngles {
    fn from((theta1, theta2): (f64, f64)) -> Self {
        Self { theta1, theta2 }
    }
}

impl From<[f64; 2]> for JointAngles {
    fn from([theta1, theta2]: [f64; 2]) -> Self {
        Self { theta1, theta2 }
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "θ1: {:+.2}° ({:+.3}rad) θ2: {:+.2}° ({:+.3}rad)",
            self.theta1,
            deg_to_rad(self.theta1),
            self.theta2,
            deg_to_rad(self.theta2)
        )
    }
}

/// Reachability annulus of a two-link chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reach {
    /// Fully folded distance, `|L1 - L2|`.
    pub min: f64,
    /// Fully extended distance, `L1 + L2`.
    pub max: f64,
}

impl Reach {
    /// Whether a distance from the base is reachable.
    ///
    /// The interval is closed, the boundaries correspond to the fully folded
    /// and fully extended arm.
    pub fn contains(&self, distance: f64) -> bool {
        let slack = REACH_TOLERANCE * self.max.max(1.0);

        distance >= self.min - slack && distance <= self.max + slack
    }

    /// Whether a point is reachable from the base at the origin.
    #[inline]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.coords.norm())
    }
}

impl std::fmt::Display for Reach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.min, self.max)
    }
}

/// Reachability bounds for the given link lengths.
pub fn reachability(l1: f64, l2: f64) -> Reach {
    Reach {
        min: (l1 - l2).abs(),
        max: l1 + l2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_config_rejects_invalid_lengths() {
        assert!(ArmConfig::new(1.0, 0.8).is_ok());
        assert!(ArmConfig::new(0.0, 0.8).is_err());
        assert!(ArmConfig::new(1.0, -0.8).is_err());
        assert!(ArmConfig::new(f64::NAN, 0.8).is_err());
        assert!(ArmConfig::new(1.0, f64::INFINITY).is_err());

        match ArmConfig::new(1.0, 0.0) {
            Err(ConfigError::InvalidLength { link, .. }) => assert_eq!(link, 2),
            _ => panic!("expected invalid length on link 2"),
        }
    }

    #[test]
    fn test_reachability() {
        let reach = reachability(1.0, 0.8);
        assert!((reach.min - 0.2).abs() < 1e-12);
        assert!((reach.max - 1.8).abs() < 1e-12);

        let reach = reachability(120.0, 150.0);
        assert_eq!(reach.min, 30.0);
        assert_eq!(reach.max, 270.0);
    }

    #[test]
    fn test_reach_closed_interval() {
        let reach = reachability(1.0, 0.5);

        assert!(reach.contains(0.5));
        assert!(reach.contains(1.5));
        assert!(reach.contains(1.0));
        assert!(!reach.contains(1.5 + 1e-6));
        assert!(!reach.contains(0.5 - 1e-6));
        assert!(!reach.contains(0.0));
    }

    #[test]
    fn test_reach_point() {
        let reach = ArmConfig::quiz().reach();

        assert!(reach.contains_point(&Point::new(1.0, 1.0)));
        assert!(!reach.contains_point(&Point::new(3.0, 3.0)));
        assert!(!reach.contains_point(&Point::new(0.1, 0.0)));
    }

    #[test]
    fn test_degree_conversion() {
        assert!((deg_to_rad(180.0) - consts::PI).abs() < 1e-12);
        assert!((rad_to_deg(consts::FRAC_PI_2) - 90.0).abs() < 1e-12);

        let angles = JointAngles::from_radians(consts::FRAC_PI_4, -consts::FRAC_PI_2);
        assert!((angles.theta1 - 45.0).abs() < 1e-12);
        assert!((angles.theta2 + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_presets() {
        let arm = ArmConfig::quiz();
        assert_eq!(arm.link1(), 1.0);
        assert_eq!(arm.link2(), 0.8);

        let arm = ArmConfig::visualizer();
        assert_eq!(arm.link1(), 150.0);
        assert_eq!(arm.link2(), 120.0);
    }
}
