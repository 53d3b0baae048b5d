//! Scheduled move commands from TOML.

use serde::Deserialize;

use crate::motion::MoveCommand;

use super::limits::SoftLimits;
use super::units::Seconds;

/// A move command with the time it fires.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CommandConfig {
    /// Trigger time, seconds from the start of the run.
    #[serde(rename = "at_secs")]
    pub at: Seconds,

    /// Absolute goal position.
    pub goal: f64,

    /// Cruise velocity limit.
    pub velocity: f64,

    /// Acceleration limit.
    pub acceleration: f64,

    /// Deceleration limit (optional).
    /// If not set, uses the acceleration value (symmetric profile).
    #[serde(default)]
    pub deceleration: Option<f64>,
}

impl CommandConfig {
    /// Get effective deceleration rate for this command.
    pub fn effective_deceleration(&self) -> f64 {
        self.deceleration.unwrap_or(self.acceleration)
    }

    /// Check if this command uses asymmetric acceleration.
    pub fn is_asymmetric(&self) -> bool {
        self.deceleration.is_some_and(|d| d != self.acceleration)
    }

    /// Convert to a move command, applying soft limits to the goal.
    ///
    /// Returns `None` when the limits reject the goal.
    pub fn to_command(&self, limits: Option<&SoftLimits>) -> Option<MoveCommand> {
        let goal = match limits {
            Some(limits) => limits.apply(self.goal)?,
            None => self.goal,
        };

        Some(MoveCommand::new(
            self.acceleration,
            self.effective_deceleration(),
            self.velocity,
            goal,
        ))
    }
}
