//! Move commands and their builder.

use crate::error::{LimitKind, PlanError};

/// One commanded move: where to go and how hard the axis may push.
///
/// Limits are magnitudes; their signs are chosen by the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    /// Acceleration limit (> 0).
    pub acceleration: f64,
    /// Deceleration limit (> 0).
    pub deceleration: f64,
    /// Cruise velocity limit (> 0).
    pub velocity_limit: f64,
    /// Absolute goal position.
    pub goal_position: f64,
}

impl MoveCommand {
    /// Create a command with independent acceleration and deceleration.
    pub const fn new(acceleration: f64, deceleration: f64, velocity_limit: f64, goal_position: f64) -> Self {
        Self {
            acceleration,
            deceleration,
            velocity_limit,
            goal_position,
        }
    }

    /// Create a command that accelerates and decelerates at the same rate.
    pub const fn symmetric(acceleration: f64, velocity_limit: f64, goal_position: f64) -> Self {
        Self::new(acceleration, acceleration, velocity_limit, goal_position)
    }

    /// Start building a command.
    pub fn builder() -> MoveCommandBuilder {
        MoveCommandBuilder::new()
    }

    /// Same limits, different goal.
    pub fn with_goal(mut self, goal_position: f64) -> Self {
        self.goal_position = goal_position;
        self
    }

    /// Check if acceleration and deceleration differ.
    pub fn is_asymmetric(&self) -> bool {
        self.acceleration != self.deceleration
    }
}

/// Builder for move commands.
#[derive(Debug, Clone, Default)]
pub struct MoveCommandBuilder {
    acceleration: Option<f64>,
    deceleration: Option<f64>,
    velocity_limit: Option<f64>,
    goal_position: Option<f64>,
}

impl MoveCommandBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal position.
    pub fn goal(mut self, position: f64) -> Self {
        self.goal_position = Some(position);
        self
    }

    /// Set the cruise velocity limit.
    pub fn velocity(mut self, limit: f64) -> Self {
        self.velocity_limit = Some(limit);
        self
    }

    /// Set the acceleration limit.
    pub fn acceleration(mut self, accel: f64) -> Self {
        self.acceleration = Some(accel);
        self
    }

    /// Set the deceleration limit.
    pub fn deceleration(mut self, decel: f64) -> Self {
        self.deceleration = Some(decel);
        self
    }

    /// Set asymmetric acceleration/deceleration limits.
    pub fn asymmetric(mut self, accel: f64, decel: f64) -> Self {
        self.acceleration = Some(accel);
        self.deceleration = Some(decel);
        self
    }

    /// Build the command.
    ///
    /// Deceleration falls back to the acceleration limit when unset.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidLimit` naming the first missing parameter.
    /// Values are range-checked later, at planning time.
    pub fn build(self) -> Result<MoveCommand, PlanError> {
        let missing = |limit| PlanError::InvalidLimit {
            limit,
            value: f64::NAN,
        };

        let acceleration = self.acceleration.ok_or_else(|| missing(LimitKind::Acceleration))?;
        let velocity_limit = self.velocity_limit.ok_or_else(|| missing(LimitKind::Velocity))?;
        let goal_position = self.goal_position.ok_or_else(|| missing(LimitKind::GoalPosition))?;

        Ok(MoveCommand {
            acceleration,
            deceleration: self.deceleration.unwrap_or(acceleration),
            velocity_limit,
            goal_position,
        })
    }
}
