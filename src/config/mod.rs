//! Configuration module for actuator-motion.
//!
//! Provides types for loading and validating scenario configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod axis;
mod command;
mod limits;
mod planner;
mod scenario;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use command::CommandConfig;
pub use limits::{LimitPolicy, SoftLimits};
pub use planner::PlannerConfig;
pub use scenario::ScenarioConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{SampleRate, Seconds, UnitExt};
