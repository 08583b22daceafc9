pub mod drop_body;
pub mod error;
pub mod gravity;
pub mod session;
pub mod stepper;
pub mod viewport;

pub use drop_body::*;
pub use error::*;
pub use gravity::*;
pub use session::*;
pub use stepper::*;
pub use viewport::*;

/// Fraction of speed retained after each bounce.
pub const DEFAULT_RESTITUTION: f32 = 0.8;
/// Rebound speed below which a ball counts as settled, in m/s.
pub const DEFAULT_STOP_SPEED: f32 = 0.1;

/// Inputs for one comparison run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Starting height of both balls in meters.
    pub drop_height: f32,
    pub body_left: String,
    pub body_right: String,
    /// Optional ball mass in grams, only used for the weight readout.
    pub mass_grams: Option<f32>,
    pub restitution: f32,
    pub stop_speed: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            drop_height: 10.0,
            body_left: "earth".to_string(),
            body_right: "moon".to_string(),
            mass_grams: None,
            restitution: DEFAULT_RESTITUTION,
            stop_speed: DEFAULT_STOP_SPEED,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.drop_height = height;
        self
    }

    pub fn with_bodies(mut self, left: &str, right: &str) -> Self {
        self.body_left = left.to_string();
        self.body_right = right.to_string();
        self
    }

    pub fn with_mass(mut self, grams: f32) -> Self {
        self.mass_grams = Some(grams);
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_stop_speed(mut self, stop_speed: f32) -> Self {
        self.stop_speed = stop_speed;
        self
    }
}
