use crate::sim::drop_body::{DropBody, DropSnapshot};

/// Longest time increment a single tick may integrate, in seconds.
/// A stalled frame source (e.g. an unfocused window) otherwise hands over
/// one huge delta and the ball tunnels through most of its trajectory.
pub const MAX_TICK_DT: f32 = 0.033;

/// Outcome of one stepper tick.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// False once every simulation has settled; the owner stops ticking.
    pub any_running: bool,
    pub snapshots: Vec<DropSnapshot>,
}

/// Drives a set of drop simulations one tick at a time.
///
/// Pure per-tick logic: the stepper holds no timer and schedules nothing.
/// Whatever invokes it (an animation frame callback, a test loop) keeps
/// calling [`Stepper::tick`] until `any_running` comes back false.
#[derive(Debug)]
pub struct Stepper {
    bodies: Vec<DropBody>,
}

impl Stepper {
    pub fn new(bodies: Vec<DropBody>) -> Self {
        Self { bodies }
    }

    /// Advance every non-settled simulation by the capped time delta.
    ///
    /// A non-positive `raw_dt` performs no integration and just reports
    /// current state.
    pub fn tick(&mut self, raw_dt: f32) -> StepResult {
        let dt = raw_dt.min(MAX_TICK_DT);

        if dt > 0.0 {
            for body in &mut self.bodies {
                if !body.is_settled() {
                    body.step(dt);
                }
            }
        }

        StepResult {
            any_running: self.any_running(),
            snapshots: self.snapshots(),
        }
    }

    pub fn any_running(&self) -> bool {
        self.bodies.iter().any(|body| !body.is_settled())
    }

    pub fn snapshots(&self) -> Vec<DropSnapshot> {
        self.bodies.iter().map(DropBody::snapshot).collect()
    }

    pub fn bodies(&self) -> &[DropBody] {
        &self.bodies
    }
}
