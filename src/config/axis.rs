//! Axis configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::motion::KinematicState;

use super::limits::SoftLimits;

/// The simulated axis and where it starts.
#[derive(Debug, Clone, Deserialize)]
pub struct AxisConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Start position in axis units.
    #[serde(default)]
    pub initial_position: f64,

    /// Start velocity in axis units per second.
    #[serde(default)]
    pub initial_velocity: f64,

    /// Optional soft limits on goals.
    #[serde(default)]
    pub limits: Option<SoftLimits>,
}

impl AxisConfig {
    /// Create an axis at rest at the origin.
    pub fn new(name: &str) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            initial_position: 0.0,
            initial_velocity: 0.0,
            limits: None,
        }
    }

    /// Kinematic state at the start of the run.
    pub fn initial_state(&self) -> KinematicState {
        KinematicState::new(self.initial_position, self.initial_velocity)
    }
}
