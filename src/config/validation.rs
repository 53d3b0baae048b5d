//! Configuration validation.

use crate::error::{ConfigError, Error, Result, ScheduleError};
use crate::motion::validate_limits;

use super::command::CommandConfig;
use super::limits::{LimitPolicy, SoftLimits};
use super::ScenarioConfig;

/// Validate a scenario configuration.
///
/// Checks:
/// - Duration is finite and positive
/// - Planner tolerances are finite and non-negative
/// - Soft limits are valid (min < max)
/// - Every command fires inside the run, at a distinct time
/// - Command limits are positive and goals respect rejecting soft limits
///
/// Momentum-dependent failures such as a goal that is too close cannot be
/// known before the run and are reported by the scheduler instead.
pub fn validate_config(config: &ScenarioConfig) -> Result<()> {
    let duration = config.duration.value();
    if !(duration.is_finite() && duration > 0.0) {
        return Err(Error::Config(ConfigError::InvalidDuration(duration)));
    }

    if !config.planner.is_valid() {
        let bad = if config.planner.position_tolerance.is_finite()
            && config.planner.position_tolerance >= 0.0
        {
            config.planner.velocity_tolerance
        } else {
            config.planner.position_tolerance
        };
        return Err(Error::Config(ConfigError::InvalidTolerance(bad)));
    }

    if let Some(ref limits) = config.axis.limits {
        if !limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: limits.min,
                max: limits.max,
            }));
        }
    }

    for (i, command) in config.commands.iter().enumerate() {
        validate_command(command, duration, config.axis.limits.as_ref())?;

        let duplicate = config.commands[..i].iter().any(|c| c.at == command.at);
        if duplicate {
            return Err(Error::Schedule(ScheduleError::DuplicateTrigger(
                command.at.value(),
            )));
        }
    }

    Ok(())
}

fn validate_command(
    command: &CommandConfig,
    duration: f64,
    limits: Option<&SoftLimits>,
) -> Result<()> {
    let at = command.at.value();
    if !(at.is_finite() && at >= 0.0) {
        return Err(Error::Schedule(ScheduleError::InvalidTriggerTime(at)));
    }

    if at >= duration {
        return Err(Error::Config(ConfigError::TriggerBeyondDuration {
            trigger: at,
            duration,
        }));
    }

    if let Some(limits) = limits {
        if limits.policy == LimitPolicy::Reject && !limits.contains(command.goal) {
            return Err(Error::Config(ConfigError::GoalOutsideLimits {
                goal: command.goal,
                min: limits.min,
                max: limits.max,
            }));
        }
    }

    if let Some(cmd) = command.to_command(limits) {
        validate_limits(&cmd)?;
    }

    Ok(())
}
