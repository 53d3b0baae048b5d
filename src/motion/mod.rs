//! Motion module for actuator-motion.
//!
//! Provides move commands, feasibility checks, profile classification and
//! solving, and fixed-step integration of the resulting profiles.

mod classifier;
mod command;
mod integrator;
mod planner;
mod profile;
mod solver;
mod state;
mod validator;

pub use classifier::{classify, NormalizedCase, VelocityRegime};
pub use command::{MoveCommand, MoveCommandBuilder};
pub use integrator::Integrator;
pub use planner::{plan, Planner};
pub use profile::{Direction, MotionPhase, MotionSegment, PhaseBoundaries, Profile, ProfileShape};
pub use solver::solve;
pub use state::KinematicState;
pub use validator::{stopping_distance, validate, validate_limits};
