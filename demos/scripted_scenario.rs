//! Scripted scenario example.
//!
//! Replays a timeline of move commands against one axis and prints what the
//! planner decided for each command plus the final state.
//!
//! Run with an optional scenario file:
//!
//! ```text
//! cargo run --example scripted_scenario -- scenario.toml
//! ```

use actuator_motion::{
    load_config, parse_config, CommandScheduler, Profile, ScenarioConfig, Seconds, Trace,
};

const DEFAULT_SCENARIO: &str = r#"
sample_rate_hz = 10000.0
duration_secs = 60.0

[axis]
name = "linear_actuator"
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

fn describe(profile: &Profile, issued_at: f64) {
    println!("  Shape: {}", profile.shape.as_str());
    println!("  Regime: {}", profile.regime.as_str());
    println!("  Direction: {:?}", profile.direction);
    println!("  Peak velocity: {:.4}", profile.peak_velocity);
    for (i, segment) in profile.segments().iter().enumerate() {
        println!(
            "  Phase {}: from t = {:.4} s at {:+.1}",
            i,
            issued_at + segment.start_time,
            segment.acceleration
        );
    }
    println!("  Ends at t = {:.4} s", issued_at + profile.duration());
}

fn main() {
    println!("=== Scripted Scenario Example ===\n");

    let config: ScenarioConfig = match std::env::args().nth(1) {
        Some(path) => load_config(&path).expect("Failed to load scenario"),
        None => parse_config(DEFAULT_SCENARIO).expect("Failed to parse scenario"),
    };

    println!(
        "Axis '{}' starting at x = {}, v = {}",
        config.axis.name,
        config.axis.initial_position,
        config.axis.initial_velocity
    );
    println!(
        "{} command(s), {} samples at {} Hz",
        config.commands.len(),
        config.sample_count(),
        config.sample_rate.hz()
    );

    let mut scheduler = CommandScheduler::from_config(&config).expect("Invalid scenario");
    let mut trace = Trace::with_capacity(config.sample_count() as usize);

    // Record segment by segment so each planned profile can be shown
    let mut boundaries: Vec<Seconds> = config.commands.iter().map(|c| c.at).collect();
    boundaries.sort_by(|a, b| a.0.total_cmp(&b.0));
    boundaries.push(config.duration);

    let mut last_issue = None;
    for horizon in boundaries {
        let chunk = Trace::record(&mut scheduler, horizon + config.sample_rate.interval());
        trace.extend(chunk.iter());

        if let Some(active) = scheduler.active() {
            if last_issue != Some(active.issued_at) {
                last_issue = Some(active.issued_at);
                println!("\nProfile issued at t = {:.4} s:", active.issued_at);
                describe(&active.profile, active.issued_at);
            }
        }
    }

    for rejection in scheduler.rejections() {
        println!(
            "\nCommand at t = {} s rejected: {}",
            rejection.trigger_time, rejection.error
        );
    }

    if let Some(last) = trace.last() {
        println!("\n=== Final Sample ===");
        println!("t = {:.4} s", last.time);
        println!("Position: {:.6}", last.position);
        println!("Velocity: {:.6}", last.velocity);
        println!("Acceleration: {:.6}", last.acceleration);
    }

    println!("\nRecorded {} samples", trace.len());
}
