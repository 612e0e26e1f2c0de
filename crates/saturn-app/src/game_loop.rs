//! Fixed-timestep frame loop implementing the "Fix Your Timestep" pattern.
//!
//! Orbit updates run at exactly the configured rate regardless of how long
//! presentation takes. The caller renders once per tick after applying the
//! updates the tick reports.

use std::time::{Duration, Instant};
use tracing::warn;

/// Maximum frame time clamp to prevent spiral of death.
/// If a frame takes longer than this, we clamp and accept slowdown
/// rather than trying to catch up with dozens of updates.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep accumulator.
pub struct GameLoop {
    dt: f64,
    previous_time: Instant,
    accumulator: f64,
    tick_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// Loop updating `rate_hz` times per second. A zero rate is treated as 1 Hz.
    pub fn new(rate_hz: u32) -> Self {
        Self {
            dt: 1.0 / f64::from(rate_hz.max(1)),
            previous_time: Instant::now(),
            accumulator: 0.0,
            tick_count: 0,
            update_count: 0,
        }
    }

    /// Measures elapsed wall-clock time since the previous tick and returns
    /// how many fixed updates are due.
    pub fn tick(&mut self) -> u32 {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance_by(frame_time)
    }

    /// [`tick`](Self::tick) with an explicit frame time in seconds.
    pub fn advance_by(&mut self, mut frame_time: f64) -> u32 {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        let mut due = 0;
        while self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            due += 1;
        }

        self.tick_count += 1;
        self.update_count += u64::from(due);
        due
    }

    /// Time left before the next update is due.
    pub fn time_until_next_update(&self) -> Duration {
        let elapsed = self.previous_time.elapsed().as_secs_f64();
        Duration::from_secs_f64((self.dt - self.accumulator - elapsed).max(0.0))
    }

    /// Seconds per update.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the total number of ticks.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Returns the total number of update steps handed out.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
