//! Unit tests for scenario validation.

use actuator_motion::config::{parse_config, validate_config};
use actuator_motion::error::{ConfigError, Error, LimitKind, PlanError, ScheduleError};
use actuator_motion::CommandScheduler;

fn scenario(extra: &str) -> String {
    format!(
        r#"
sample_rate_hz = 1000.0
duration_secs = 10.0

[axis]
name = "x"
{}
"#,
        extra
    )
}

#[test]
fn test_duplicate_trigger_rejected() {
    let toml_str = scenario(
        r#"
[[commands]]
at_secs = 2.0
goal = 10.0
velocity = 1.0
acceleration = 1.0

[[commands]]
at_secs = 2.0
goal = 20.0
velocity = 1.0
acceleration = 1.0
"#,
    );

    assert_eq!(
        parse_config(&toml_str).unwrap_err(),
        Error::Schedule(ScheduleError::DuplicateTrigger(2.0))
    );
}

#[test]
fn test_trigger_beyond_duration() {
    let toml_str = scenario(
        r#"
[[commands]]
at_secs = 12.0
goal = 10.0
velocity = 1.0
acceleration = 1.0
"#,
    );

    assert_eq!(
        parse_config(&toml_str).unwrap_err(),
        Error::Config(ConfigError::TriggerBeyondDuration {
            trigger: 12.0,
            duration: 10.0,
        })
    );
}

#[test]
fn test_invalid_soft_limits() {
    let toml_str = scenario(
        r#"
[axis.limits]
min = 10.0
max = -10.0
"#,
    );

    assert!(matches!(
        parse_config(&toml_str),
        Err(Error::Config(ConfigError::InvalidSoftLimits { .. }))
    ));
}

#[test]
fn test_goal_outside_rejecting_limits() {
    let toml_str = scenario(
        r#"
[axis.limits]
min = 0.0
max = 100.0

[[commands]]
at_secs = 1.0
goal = 120.0
velocity = 5.0
acceleration = 6.0
"#,
    );

    assert_eq!(
        parse_config(&toml_str).unwrap_err(),
        Error::Config(ConfigError::GoalOutsideLimits {
            goal: 120.0,
            min: 0.0,
            max: 100.0,
        })
    );
}

#[test]
fn test_goal_outside_clamping_limits_is_accepted() {
    let toml_str = scenario(
        r#"
[axis.limits]
min = 0.0
max = 100.0
policy = "clamp"

[[commands]]
at_secs = 1.0
goal = 120.0
velocity = 5.0
acceleration = 6.0
"#,
    );

    let config = parse_config(&toml_str).unwrap();
    let (_, command) = config.move_commands().next().unwrap();
    assert_eq!(command.goal_position, 100.0);
}

#[test]
fn test_negative_deceleration() {
    let toml_str = scenario(
        r#"
[[commands]]
at_secs = 1.0
goal = 10.0
velocity = 5.0
acceleration = 6.0
deceleration = -8.0
"#,
    );

    assert_eq!(
        parse_config(&toml_str).unwrap_err(),
        Error::Plan(PlanError::InvalidLimit {
            limit: LimitKind::Deceleration,
            value: -8.0,
        })
    );
}

#[test]
fn test_negative_tolerance() {
    let toml_str = scenario(
        r#"
[planner]
velocity_tolerance = -0.5
"#,
    );

    assert_eq!(
        parse_config(&toml_str).unwrap_err(),
        Error::Config(ConfigError::InvalidTolerance(-0.5))
    );
}

#[test]
fn test_non_positive_duration() {
    let toml_str = r#"
sample_rate_hz = 1000.0
duration_secs = 0.0

[axis]
name = "x"
"#;

    let config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidDuration(0.0)))
    );
    assert!(CommandScheduler::from_config(&config).is_err());
}
