use tracing::{debug, trace};

use crate::sim::error::{SimError, SimResult};

/// Read-only kinematic state handed to presenters each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropSnapshot {
    /// Height above ground in meters.
    pub position: f32,
    /// Signed vertical velocity in m/s, upward positive.
    pub velocity: f32,
    pub settled: bool,
    /// Largest speed recorded over the run so far.
    pub max_speed: f32,
    /// Mean speed over all recorded ticks, 0 before the first step.
    pub avg_speed: f32,
}

/// A single ball falling under constant surface gravity and bouncing off
/// the ground plane at height 0.
///
/// State lives in physical units: meters above ground, upward-positive
/// velocity. Screen-space conversion is the presenter's job (see
/// `PanelViewport`).
#[derive(Debug, Clone)]
pub struct DropBody {
    position: f32,
    velocity: f32,
    gravity: f32,
    restitution: f32,
    stop_speed: f32,
    settled: bool,

    max_speed: f32,
    speed_sum: f32,
    samples: u32,
}

impl DropBody {
    /// Smallest drop height accepted, in meters.
    pub const MIN_DROP_HEIGHT: f32 = 1.0;

    /// Create a ball at rest at `drop_height`, ready to fall.
    pub fn new(
        drop_height: f32,
        gravity: f32,
        restitution: f32,
        stop_speed: f32,
    ) -> SimResult<Self> {
        if drop_height.is_nan() || drop_height < Self::MIN_DROP_HEIGHT {
            return Err(SimError::InvalidParameter(format!(
                "drop height must be at least {} m, got {drop_height}",
                Self::MIN_DROP_HEIGHT
            )));
        }
        if gravity.is_nan() || gravity <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "gravity must be positive, got {gravity}"
            )));
        }
        if restitution.is_nan() || restitution <= 0.0 || restitution >= 1.0 {
            return Err(SimError::InvalidParameter(format!(
                "restitution must be between 0 and 1 exclusive, got {restitution}"
            )));
        }
        if stop_speed.is_nan() || stop_speed <= 0.0 {
            return Err(SimError::InvalidParameter(format!(
                "stop speed must be positive, got {stop_speed}"
            )));
        }

        Ok(Self {
            position: drop_height,
            velocity: 0.0,
            gravity,
            restitution,
            stop_speed,
            settled: false,
            max_speed: 0.0,
            speed_sum: 0.0,
            samples: 0,
        })
    }

    /// Advance the ball by `dt` seconds of semi-implicit Euler.
    ///
    /// Velocity is integrated before position, which keeps the bounded
    /// oscillation stable at frame-sized deltas. Once settled, further
    /// steps leave the state untouched.
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt <= 0.0 {
            return;
        }

        // Integrate velocity (v = v0 + a*dt), then position (x = x0 + v*dt)
        self.velocity -= self.gravity * dt;
        self.position += self.velocity * dt;

        if self.position <= 0.0 {
            self.position = 0.0;
            // Reflect and damp
            self.velocity = -self.restitution * self.velocity;

            let rebound = self.velocity.abs();
            trace!(rebound, "bounce");

            // A rebound slower than one tick of gravity cannot clear the
            // floor again: without this resting-contact check a fast-gravity
            // body keeps trading the same tick-sized speed back and forth
            // at height 0 and never drops below the stop threshold.
            if rebound < self.stop_speed || rebound <= self.gravity * dt {
                self.velocity = 0.0;
                self.settled = true;
                debug!(gravity = self.gravity, "drop settled");
            }
        }

        self.max_speed = self.max_speed.max(self.velocity.abs());
        self.speed_sum += self.velocity.abs();
        self.samples += 1;
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Height above ground in meters. Never negative.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Signed vertical velocity in m/s, upward positive.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Read-only state for the presenter.
    pub fn snapshot(&self) -> DropSnapshot {
        let avg_speed = if self.samples == 0 {
            0.0
        } else {
            self.speed_sum / self.samples as f32
        };

        DropSnapshot {
            position: self.position,
            velocity: self.velocity,
            settled: self.settled,
            max_speed: self.max_speed,
            avg_speed,
        }
    }
}
