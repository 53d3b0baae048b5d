//! # actuator-motion
//!
//! Bounded-acceleration motion planning and fixed-step trajectory integration
//! for a single actuator axis.
//!
//! ## Features
//!
//! - **Three-phase profiles**: ramp, cruise and stop, or ramp and stop when
//!   the cruise speed is out of reach
//! - **Any starting velocity**: moves may start while the axis is already
//!   moving, toward or away from the goal, below or above the speed limit
//! - **Asymmetric limits**: independent acceleration and deceleration rates
//! - **Scripted timelines**: commands fire at trigger times and supersede the
//!   active profile
//! - **Configuration-driven**: describe a scenario in a TOML file
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use actuator_motion::{CommandScheduler, KinematicState, MoveCommand, SampleRate, Seconds};
//!
//! let rate = SampleRate::new(1000.0)?;
//! let mut scheduler = CommandScheduler::new(KinematicState::default(), rate)
//!     .with_duration(Seconds(10.0));
//!
//! // Accelerate at 6, brake at 8, cruise at 5, stop at 120
//! scheduler.schedule(Seconds(1.0), MoveCommand::new(6.0, 8.0, 5.0, 120.0))?;
//!
//! for sample in scheduler {
//!     println!("{} {} {}", sample.time, sample.position, sample.velocity);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables [`Trace`] recording for no_std with allocator
//! - `defmt`: Routes logging to defmt instead of the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible everywhere
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod schedule;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, CommandConfig, PlannerConfig, ScenarioConfig};
pub use error::{Error, LimitKind, PlanError, Result};
pub use motion::{
    plan, Direction, KinematicState, MotionPhase, MoveCommand, Planner, Profile, ProfileShape,
    VelocityRegime,
};
pub use schedule::{CommandScheduler, RealtimeRunner, Rejection, Sample};

#[cfg(feature = "alloc")]
pub use schedule::Trace;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{SampleRate, Seconds, UnitExt};
