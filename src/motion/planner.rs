//! Planner facade: validate, classify, solve.

use crate::config::PlannerConfig;
use crate::error::PlanError;

use super::classifier::classify;
use super::command::MoveCommand;
use super::profile::Profile;
use super::solver::solve;
use super::state::KinematicState;
use super::validator::{validate, validate_limits};

/// Turns move commands into profiles.
///
/// Pure: planning never touches the state it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the given tolerances.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Get the planner configuration.
    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a move from `state` to the command's goal.
    ///
    /// An axis that already rests at the goal (within tolerance) gets a
    /// zero-duration [`Profile::hold`].
    ///
    /// # Errors
    ///
    /// Any [`PlanError`]; nothing is planned on failure.
    pub fn plan(&self, state: &KinematicState, cmd: &MoveCommand) -> Result<Profile, PlanError> {
        validate_limits(cmd)?;

        if state.is_settled_at(
            cmd.goal_position,
            self.config.position_tolerance,
            self.config.velocity_tolerance,
        ) {
            debug!("already settled at goal {}", cmd.goal_position);
            return Ok(Profile::hold());
        }

        validate(cmd, state)?;

        let case = classify(state, cmd);
        debug!(
            "classified move: regime={} triangular={} distance={}",
            case.regime.as_str(),
            case.triangular,
            case.distance
        );

        let profile = solve(&case)?;
        debug!(
            "planned {} profile: t1={} t2={} t3={}",
            profile.shape.as_str(),
            profile.boundaries.t1(),
            profile.boundaries.t2(),
            profile.boundaries.t3()
        );

        Ok(profile)
    }
}

/// Plan with default tolerances.
///
/// # Errors
///
/// See [`Planner::plan`].
pub fn plan(state: &KinematicState, cmd: &MoveCommand) -> Result<Profile, PlanError> {
    Planner::default().plan(state, cmd)
}
