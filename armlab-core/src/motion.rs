//! Joint angle sequences for animation.
//!
//! The generators yield one pose per frame and never schedule anything
//! themselves. The host drives them from its own frame callback.

use crate::geometry::JointAngles;

/// Ease out cubic, `t` is clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(3)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Eased sweep from the zero pose to a target pose.
///
/// Yields exactly `frames` poses, the last one equals the target.
pub struct Sweep {
    target: JointAngles,
    frames: u32,
    frame: u32,
}

impl Sweep {
    pub fn new(target: JointAngles, frames: u32) -> Self {
        Self {
            target,
            frames,
            frame: 0,
        }
    }
}

impl Iterator for Sweep {
    type Item = JointAngles;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.frames {
            return None;
        }

        self.frame += 1;

        let eased = ease_out_cubic(self.frame as f64 / self.frames as f64);

        Some(JointAngles::new(
            lerp(0.0, self.target.theta1, eased),
            lerp(0.0, self.target.theta2, eased),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.frames - self.frame) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}

/// Oscillating demonstration motion.
///
/// Joint 1 swings within ±60° and joint 2 within ±90° at one and a half
/// times the frequency.
pub struct Oscillation {
    frames: u32,
    frame: u32,
}

impl Oscillation {
    /// Phase advance per frame, in radians.
    const PHASE_STEP: f64 = 0.02;
    const AMPLITUDE_THETA1: f64 = 60.0;
    const AMPLITUDE_THETA2: f64 = 90.0;
    const FREQUENCY_RATIO: f64 = 1.5;

    pub fn new(frames: u32) -> Self {
        Self { frames, frame: 0 }
    }
}

impl Iterator for Oscillation {
    type Item = JointAngles;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.frames {
            return None;
        }

        self.frame += 1;

        let time = self.frame as f64 * Self::PHASE_STEP;

        Some(JointAngles::new(
            time.sin() * Self::AMPLITUDE_THETA1,
            (time * Self::FREQUENCY_RATIO).cos() * Self::AMPLITUDE_THETA2,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.frames - self.frame) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Oscillation {}
