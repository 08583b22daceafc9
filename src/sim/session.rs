use tracing::info;

use crate::sim::drop_body::{DropBody, DropSnapshot};
use crate::sim::error::{SimError, SimResult};
use crate::sim::gravity::surface_gravity;
use crate::sim::stepper::{StepResult, Stepper};
use crate::sim::RunConfig;

/// Per-panel facts fixed at start: which body, its gravity, and the
/// weight readout when a mass was supplied.
#[derive(Debug, Clone)]
pub struct PanelInfo {
    pub body: String,
    /// Surface gravity in m/s².
    pub gravity: f32,
    /// Weight in newtons for the supplied mass, if any. Informational
    /// only; the mass plays no role in the fall itself.
    pub weight: Option<f32>,
}

impl PanelInfo {
    /// Display label with a leading capital.
    pub fn label(&self) -> String {
        let mut chars = self.body.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// One validated run: two balls dropped from the same height under two
/// different surface gravities.
#[derive(Debug)]
pub struct Session {
    panels: [PanelInfo; 2],
    stepper: Stepper,
}

impl Session {
    /// Validate `config` and build a fresh two-panel run.
    pub fn start(config: &RunConfig) -> SimResult<Self> {
        if let Some(mass) = config.mass_grams {
            if mass.is_nan() || mass < 1.0 {
                return Err(SimError::InvalidParameter(format!(
                    "mass must be at least 1 gram, got {mass}"
                )));
            }
        }

        let left = Self::panel(&config.body_left, config.mass_grams)?;
        let right = Self::panel(&config.body_right, config.mass_grams)?;

        let bodies = vec![
            DropBody::new(
                config.drop_height,
                left.gravity,
                config.restitution,
                config.stop_speed,
            )?,
            DropBody::new(
                config.drop_height,
                right.gravity,
                config.restitution,
                config.stop_speed,
            )?,
        ];

        info!(
            left = %left.body,
            right = %right.body,
            height = config.drop_height,
            "simulation started"
        );

        Ok(Self {
            panels: [left, right],
            stepper: Stepper::new(bodies),
        })
    }

    fn panel(name: &str, mass_grams: Option<f32>) -> SimResult<PanelInfo> {
        let gravity = surface_gravity(name)?;
        Ok(PanelInfo {
            body: name.to_string(),
            gravity,
            weight: mass_grams.map(|grams| grams / 1000.0 * gravity),
        })
    }

    /// Advance both panels by one frame delta.
    pub fn tick(&mut self, raw_dt: f32) -> StepResult {
        self.stepper.tick(raw_dt)
    }

    pub fn panels(&self) -> &[PanelInfo; 2] {
        &self.panels
    }

    pub fn snapshots(&self) -> Vec<DropSnapshot> {
        self.stepper.snapshots()
    }

    pub fn is_finished(&self) -> bool {
        !self.stepper.any_running()
    }
}

/// Owns at most one active session.
///
/// Starting a new run always discards the previous one before validating
/// the new inputs, so two runs can never drive state at the same time and
/// a rejected restart leaves nothing running.
pub struct SessionDriver {
    active: Option<Session>,
}

impl SessionDriver {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Cancel whatever run is active, then validate and install a new one.
    pub fn start(&mut self, config: &RunConfig) -> SimResult<&mut Session> {
        self.active = None;
        let session = Session::start(config)?;
        Ok(self.active.insert(session))
    }

    pub fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Session> {
        self.active.as_mut()
    }

    pub fn stop(&mut self) {
        self.active = None;
    }
}

impl Default for SessionDriver {
    fn default() -> Self {
        Self::new()
    }
}
