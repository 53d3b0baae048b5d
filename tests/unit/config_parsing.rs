//! Unit tests for TOML scenario parsing.

use actuator_motion::config::{load_config, parse_config, LimitPolicy, ScenarioConfig};
use actuator_motion::error::{ConfigError, Error};

const SCRIPTED: &str = r#"
sample_rate_hz = 10000.0
duration_secs = 60.0

[axis]
name = "carriage"
initial_position = 0.0
initial_velocity = 6.0

[[commands]]
at_secs = 1.0
goal = 120.0
velocity = 5.0
acceleration = 6.0
deceleration = 8.0

[[commands]]
at_secs = 30.0
goal = 110.0
velocity = 20.0
acceleration = 2.0
deceleration = 4.0
"#;

/// Test parsing the full scripted scenario.
#[test]
fn test_parse_scripted_scenario() {
    let config = parse_config(SCRIPTED).expect("Failed to parse scenario");

    assert_eq!(config.sample_rate.hz(), 10_000.0);
    assert_eq!(config.duration.value(), 60.0);
    assert_eq!(config.axis.name.as_str(), "carriage");
    assert_eq!(config.axis.initial_state().velocity, 6.0);
    assert_eq!(config.commands.len(), 2);
    assert_eq!(config.sample_count(), 600_000);

    let first = &config.commands[0];
    assert_eq!(first.at.value(), 1.0);
    assert_eq!(first.goal, 120.0);
    assert!(first.is_asymmetric());
}

/// Test that the planner section falls back to default tolerances.
#[test]
fn test_default_planner_tolerances() {
    let config = parse_config(SCRIPTED).unwrap();

    assert_eq!(config.planner.position_tolerance, 1e-6);
    assert_eq!(config.planner.velocity_tolerance, 1e-6);
}

/// Test parsing explicit tolerances and soft limits.
#[test]
fn test_parse_planner_and_limits() {
    let toml_str = r#"
sample_rate_hz = 500.0
duration_secs = 10.0

[axis]
name = "lift"

[axis.limits]
min = -5.0
max = 50.0
policy = "clamp"

[planner]
position_tolerance = 0.001
"#;

    let config = parse_config(toml_str).unwrap();
    let limits = config.axis.limits.expect("limits missing");

    assert_eq!(limits.min, -5.0);
    assert_eq!(limits.max, 50.0);
    assert_eq!(limits.policy, LimitPolicy::Clamp);
    assert_eq!(config.planner.position_tolerance, 0.001);
    assert_eq!(config.planner.velocity_tolerance, 1e-6);
}

/// Test that the limit policy defaults to reject.
#[test]
fn test_limit_policy_default() {
    let toml_str = r#"
sample_rate_hz = 500.0
duration_secs = 10.0

[axis]
name = "lift"

[axis.limits]
min = 0.0
max = 1.0
"#;

    let config: ScenarioConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.axis.limits.unwrap().policy, LimitPolicy::Reject);
}

/// Test that a zero sample rate is refused while parsing.
#[test]
fn test_zero_sample_rate() {
    let toml_str = r#"
sample_rate_hz = 0.0
duration_secs = 10.0

[axis]
name = "x"
"#;

    match parse_config(toml_str) {
        Err(Error::Config(ConfigError::ParseError(msg))) => {
            assert!(msg.as_str().contains("sample rate"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

/// Test that a missing axis table is a parse error.
#[test]
fn test_missing_axis() {
    let toml_str = r#"
sample_rate_hz = 100.0
duration_secs = 10.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::ParseError(_)))
    ));
}

/// Test loading a scenario from disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("actuator_motion_scripted_scenario.toml");
    std::fs::write(&path, SCRIPTED).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.commands.len(), 2);

    let _ = std::fs::remove_file(&path);
}
