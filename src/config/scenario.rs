//! Scenario configuration - root configuration structure.

use heapless::Vec;
use serde::Deserialize;

use crate::motion::MoveCommand;
use crate::schedule::MAX_COMMANDS;

use super::axis::AxisConfig;
use super::command::CommandConfig;
use super::planner::PlannerConfig;
use super::units::{SampleRate, Seconds};

/// Root configuration structure from TOML: one axis, a sample clock and a
/// list of timed move commands.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// Integration rate.
    #[serde(rename = "sample_rate_hz")]
    pub sample_rate: SampleRate,

    /// Length of the run.
    #[serde(rename = "duration_secs")]
    pub duration: Seconds,

    /// The simulated axis.
    pub axis: AxisConfig,

    /// Planner tolerances.
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Timed move commands, in any order.
    #[serde(default)]
    pub commands: Vec<CommandConfig, MAX_COMMANDS>,
}

impl ScenarioConfig {
    /// Create a scenario without commands.
    pub fn new(sample_rate: SampleRate, duration: Seconds, axis: AxisConfig) -> Self {
        Self {
            sample_rate,
            duration,
            axis,
            planner: PlannerConfig::default(),
            commands: Vec::new(),
        }
    }

    /// Number of samples in `[0, duration)`.
    pub fn sample_count(&self) -> u64 {
        let ticks = libm::ceil(self.duration.value() * self.sample_rate.hz());
        if ticks > 0.0 {
            ticks as u64
        } else {
            0
        }
    }

    /// Get the command that fires at `at`, if any.
    pub fn command_at(&self, at: Seconds) -> Option<&CommandConfig> {
        self.commands.iter().find(|c| c.at == at)
    }

    /// Commands the soft limits let through, with clamping applied.
    pub fn move_commands(&self) -> impl Iterator<Item = (Seconds, MoveCommand)> + '_ {
        let limits = self.axis.limits.as_ref();
        self.commands
            .iter()
            .filter_map(move |c| c.to_command(limits).map(|cmd| (c.at, cmd)))
    }
}
