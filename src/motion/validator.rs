//! Feasibility checks run before a command is planned.

use crate::error::{LimitKind, PlanError};

use super::command::MoveCommand;
use super::state::KinematicState;

/// Distance needed to bring `velocity` to rest at `limit`.
#[inline]
pub fn stopping_distance(velocity: f64, limit: f64) -> f64 {
    let t = velocity / limit;
    0.5 * limit * t * t
}

/// Check that every limit of the command is finite and positive.
///
/// # Errors
///
/// Returns `PlanError::InvalidLimit` for the first offending parameter, in
/// the order acceleration, deceleration, velocity limit, goal position.
pub fn validate_limits(cmd: &MoveCommand) -> Result<(), PlanError> {
    check_positive(LimitKind::Acceleration, cmd.acceleration)?;
    check_positive(LimitKind::Deceleration, cmd.deceleration)?;
    check_positive(LimitKind::Velocity, cmd.velocity_limit)?;

    if !cmd.goal_position.is_finite() {
        return Err(PlanError::InvalidLimit {
            limit: LimitKind::GoalPosition,
            value: cmd.goal_position,
        });
    }

    Ok(())
}

/// Reject physically impossible or degenerate commands.
///
/// On top of [`validate_limits`], the axis must be able to shed any velocity
/// pointing at the goal before it gets there: the stopping distance at the
/// deceleration limit has to be strictly shorter than the distance left.
///
/// # Errors
///
/// `PlanError::InvalidLimit` or `PlanError::GoalTooClose`.
pub fn validate(cmd: &MoveCommand, state: &KinematicState) -> Result<(), PlanError> {
    validate_limits(cmd)?;

    let displacement = state.displacement_to(cmd.goal_position);
    let available = libm::fabs(displacement);

    // Zero displacement: any motion at all overshoots
    let toward_goal = displacement * state.velocity > 0.0
        || (displacement == 0.0 && state.velocity != 0.0);

    if toward_goal {
        let stopping = stopping_distance(state.velocity, cmd.deceleration);
        if stopping >= available {
            return Err(PlanError::GoalTooClose {
                stopping_distance: stopping,
                available,
            });
        }
    }

    Ok(())
}

fn check_positive(limit: LimitKind, value: f64) -> Result<(), PlanError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidLimit { limit, value })
    }
}
