//! Camera orbit around the planet in the XZ plane.

use saturn_math::{Point3, Scalar};

/// Tracks the orbit angle one frame at a time.
///
/// The angle is derived from a frame index modulo `period_seconds * fps`
/// rather than accumulated, so rounding in the per-frame increment never
/// builds up and one full period of frames lands exactly where it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitController<S> {
    offset: S,
    frame: u32,
    frames_per_turn: u32,
    angle: S,
    step: S,
}

impl<S: Scalar> OrbitController<S> {
    /// Controller for one revolution every `period_seconds` at `fps` frames
    /// per second. A zero rate leaves the camera still.
    pub fn new(period_seconds: u32, fps: u32) -> Self {
        let frames_per_turn = period_seconds.saturating_mul(fps);
        Self {
            offset: S::ZERO,
            frame: 0,
            frames_per_turn,
            angle: S::ZERO,
            step: S::turn_fraction(1, frames_per_turn),
        }
    }

    /// Current angle in radians, always in `[0, TAU)`.
    pub fn angle(&self) -> S {
        self.angle
    }

    /// Nominal per-frame angle increment, `TAU / (period_seconds * fps)`.
    pub fn step(&self) -> S {
        self.step
    }

    /// Frames in one revolution.
    pub fn frames_per_turn(&self) -> u32 {
        self.frames_per_turn
    }

    /// Restart the orbit from `angle`.
    pub fn set_angle(&mut self, angle: S) {
        self.offset = angle.wrap_angle();
        self.frame = 0;
        self.angle = self.offset;
    }

    /// Move one frame along the orbit.
    pub fn advance(&mut self) {
        if self.frames_per_turn == 0 {
            return;
        }
        self.frame = (self.frame + 1) % self.frames_per_turn;
        let travelled = S::turn_fraction(self.frame, self.frames_per_turn);
        self.angle = (self.offset + travelled).wrap_angle();
    }

    /// Camera position at the current angle: `(r·cos θ, 0, r·sin θ)`.
    pub fn camera_position(&self, radius: S) -> Point3<S> {
        Point3::new(
            radius * self.angle.cos(),
            S::ZERO,
            radius * self.angle.sin(),
        )
    }
}
