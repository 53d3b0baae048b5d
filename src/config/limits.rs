//! Soft limit configuration and types.

use serde::Deserialize;

/// Policy for handling goals outside the soft limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Reject moves whose goal exceeds the limits.
    #[default]
    Reject,
    /// Clamp the goal to the nearest limit.
    Clamp,
}

/// Soft limits on commanded goal positions, in axis units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SoftLimits {
    /// Minimum allowed goal.
    pub min: f64,

    /// Maximum allowed goal.
    pub max: f64,

    /// What to do when a goal is outside.
    #[serde(default)]
    pub policy: LimitPolicy,
}

impl SoftLimits {
    /// Create new soft limits.
    pub fn new(min: f64, max: f64, policy: LimitPolicy) -> Self {
        Self { min, max, policy }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min < self.max
    }

    /// Check if a position is within limits.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.min && position <= self.max
    }

    /// Apply limit policy to a goal position.
    ///
    /// Returns `Some(position)` if valid or clamped, `None` if rejected.
    pub fn apply(&self, goal: f64) -> Option<f64> {
        match self.policy {
            _ if self.contains(goal) => Some(goal),
            LimitPolicy::Reject => None,
            LimitPolicy::Clamp if goal < self.min => Some(self.min),
            LimitPolicy::Clamp => Some(self.max),
        }
    }
}
