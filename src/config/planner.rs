//! Planner tuning from TOML.

use serde::Deserialize;

/// Tolerances the planner uses to decide that the axis is already settled.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PlannerConfig {
    /// Distance to goal treated as "at the goal".
    #[serde(default = "default_tolerance")]
    pub position_tolerance: f64,

    /// Speed treated as "at rest".
    #[serde(default = "default_tolerance")]
    pub velocity_tolerance: f64,
}

fn default_tolerance() -> f64 {
    1e-6
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            position_tolerance: default_tolerance(),
            velocity_tolerance: default_tolerance(),
        }
    }
}

impl PlannerConfig {
    /// Create a config with explicit tolerances.
    pub const fn new(position_tolerance: f64, velocity_tolerance: f64) -> Self {
        Self {
            position_tolerance,
            velocity_tolerance,
        }
    }

    /// Loosen the tolerances to at least the given values.
    pub fn widened(self, position_tolerance: f64, velocity_tolerance: f64) -> Self {
        Self {
            position_tolerance: libm::fmax(self.position_tolerance, position_tolerance),
            velocity_tolerance: libm::fmax(self.velocity_tolerance, velocity_tolerance),
        }
    }

    /// Check both tolerances are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        ok(self.position_tolerance) && ok(self.velocity_tolerance)
    }
}
