use crate::geometry::{reachability, ArmConfig, JointAngles, Point, Reach};

/// Target lies outside the reachability annulus.
///
/// This is an expected outcome of a solve, not a fault. The fields carry the
/// diagnostics a caller needs to explain why.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("target at distance {distance:.4} is outside reach [{min_reach:.4}, {max_reach:.4}]")]
pub struct Unreachable {
    /// Distance of the target from the base.
    pub distance: f64,
    /// Fully folded reach.
    pub min_reach: f64,
    /// Fully extended reach.
    pub max_reach: f64,
}

/// Analytic inverse kinematics of a two-link planar arm.
///
/// Only the elbow-down branch is computed, so the solver is single valued.
/// A caller that needs the elbow-up pose negates `theta2` and recomputes
/// `theta1` with the mirrored offset.
pub struct InverseKinematics {
    l1: f64,
    l2: f64,
}

impl InverseKinematics {
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    #[inline]
    pub fn reach(&self) -> Reach {
        reachability(self.l1, self.l2)
    }

    pub fn solve(&self, target: Point) -> Result<JointAngles, Unreachable> {
        let reach = self.reach();

        let distance = (target.x.powi(2) + target.y.powi(2)).sqrt();
        log::debug!("IK Target:          ({:.4}, {:.4})", target.x, target.y);
        log::debug!("IK Distance:        {:.4} reach {}", distance, reach);

        if !reach.contains(distance) {
            return Err(Unreachable {
                distance,
                min_reach: reach.min,
                max_reach: reach.max,
            });
        }

        // Boundary distances can push the cosine marginally outside [-1, 1].
        let cos_theta_2 = ((target.x.powi(2) + target.y.powi(2)
            - self.l1.powi(2)
            - self.l2.powi(2))
            / (2.0 * self.l1 * self.l2))
            .clamp(-1.0, 1.0);

        let theta_2 = cos_theta_2.acos();
        log::debug!(
            "IK theta_2:         {:5.3}rad {:6.2}°",
            theta_2,
            theta_2.to_degrees()
        );

        let k1 = self.l1 + self.l2 * cos_theta_2;
        let k2 = self.l2 * theta_2.sin();

        let theta_1 = target.y.atan2(target.x) - k2.atan2(k1);
        log::debug!(
            "IK theta_1:         {:5.3}rad {:6.2}°",
            theta_1,
            theta_1.to_degrees()
        );

        Ok(JointAngles::from_radians(theta_1, theta_2))
    }
}

impl From<&ArmConfig> for InverseKinematics {
    fn from(arm: &ArmConfig) -> Self {
        Self::new(arm.link1(), arm.link2())
    }
}

/// Joint angles placing the end effector at `(x, y)`, elbow-down branch.
pub fn solve_ik(x: f64, y: f64, l1: f64, l2: f64) -> Result<JointAngles, Unreachable> {
    InverseKinematics::new(l1, l2).solve(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::forward_kinematics;

    const L1: f64 = 1.0;
    const L2: f64 = 0.8;

    #[test]
    fn test_ik_round_trip() {
        let mut theta1 = -180.0;
        while theta1 <= 180.0 {
            let mut theta2 = -180.0;
            while theta2 <= 180.0 {
                let p = forward_kinematics(theta1, theta2, L1, L2);
                let angles = solve_ik(p.x, p.y, L1, L2).unwrap();
                let q = forward_kinematics(angles.theta1, angles.theta2, L1, L2);

                assert!(
                    (p - q).norm() < 1e-6,
                    "round trip failed at ({}, {}): {:?} != {:?}",
                    theta1,
                    theta2,
                    p,
                    q
                );

                theta2 += 7.5;
            }
            theta1 += 7.5;
        }
    }

    #[test]
    fn test_ik_elbow_down() {
        let p = forward_kinematics(20.0, -50.0, L1, L2);
        let angles = solve_ik(p.x, p.y, L1, L2).unwrap();

        assert!((angles.theta2 - 50.0).abs() < 1e-9);
        assert!(angles.theta2 >= 0.0);
    }

    #[test]
    fn test_ik_recovers_elbow_down_input() {
        let p = forward_kinematics(45.0, 30.0, L1, L2);
        let angles = solve_ik(p.x, p.y, L1, L2).unwrap();

        assert!((angles.theta1 - 45.0).abs() < 1e-9);
        assert!((angles.theta2 - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_ik_fully_extended() {
        let angles = solve_ik(L1 + L2, 0.0, L1, L2).unwrap();
        assert!(angles.theta1.abs() < 1e-9);
        assert!(angles.theta2.abs() < 1e-9);

        let angles = solve_ik(0.0, L1 + L2, L1, L2).unwrap();
        assert!((angles.theta1 - 90.0).abs() < 1e-9);
        assert!(angles.theta2.abs() < 1e-9);
    }

    #[test]
    fn test_ik_fully_folded() {
        let angles = solve_ik(L1 - L2, 0.0, L1, L2).unwrap();
        assert!((angles.theta2.abs() - 180.0).abs() < 1e-9);
        assert!(angles.theta1.is_finite());
    }

    #[test]
    fn test_ik_outside_annulus() {
        let epsilon = 1e-6;

        assert!(solve_ik(L1 + L2 + epsilon, 0.0, L1, L2).is_err());
        assert!(solve_ik(L1 - L2 - epsilon, 0.0, L1, L2).is_err());
        assert!(solve_ik(0.0, 0.0, L1, L2).is_err());
    }

    #[test]
    fn test_ik_unreachable_diagnostics() {
        let err = solve_ik(3.0, 3.0, L1, L2).unwrap_err();

        assert!((err.distance - 18.0_f64.sqrt()).abs() < 1e-9);
        assert!((err.max_reach - 1.8).abs() < 1e-12);
        assert!((err.min_reach - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_ik_origin_equal_links() {
        let angles = solve_ik(0.0, 0.0, 1.0, 1.0).unwrap();

        assert!((angles.theta2 - 180.0).abs() < 1e-9);
        assert!(angles.theta1.is_finite());

        let p = forward_kinematics(angles.theta1, angles.theta2, 1.0, 1.0);
        assert!(p.coords.norm() < 1e-9);
    }

    #[test]
    fn test_ik_from_arm() {
        let arm = ArmConfig::visualizer();
        let ik = InverseKinematics::from(&arm);

        let angles = ik.solve(Point::new(100.0, 150.0)).unwrap();
        let p = forward_kinematics(angles.theta1, angles.theta2, arm.link1(), arm.link2());

        assert!((p.x - 100.0).abs() < 1e-6);
        assert!((p.y - 150.0).abs() < 1e-6);
    }
}
