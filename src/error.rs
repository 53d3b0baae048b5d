//! Error types for actuator-motion library.
//!
//! Provides unified error handling across configuration, motion planning, and scheduling.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all actuator-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motion planning error
    Plan(PlanError),
    /// Command scheduling error
    Schedule(ScheduleError),
}

/// Which parameter of a move command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LimitKind {
    /// Acceleration limit
    Acceleration,
    /// Deceleration limit
    Deceleration,
    /// Velocity limit
    Velocity,
    /// Goal position (must be finite)
    GoalPosition,
}

impl LimitKind {
    /// Short lowercase name, used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            LimitKind::Acceleration => "acceleration",
            LimitKind::Deceleration => "deceleration",
            LimitKind::Velocity => "velocity limit",
            LimitKind::GoalPosition => "goal position",
        }
    }
}

/// Planning-time failures. None of them touch integrator state.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Non-positive (or non-finite) limit in the command
    InvalidLimit {
        /// Offending parameter
        limit: LimitKind,
        /// Value supplied
        value: f64,
    },
    /// Current momentum cannot be shed before reaching the goal
    GoalTooClose {
        /// Distance needed to stop at the deceleration limit
        stopping_distance: f64,
        /// Distance remaining to the goal
        available: f64,
    },
    /// The no-cruise system has no positive-time solution
    NoFeasibleTriangularSolution,
}

impl PlanError {
    /// Short lowercase name, used in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanError::InvalidLimit { .. } => "invalid limit",
            PlanError::GoalTooClose { .. } => "goal too close",
            PlanError::NoFeasibleTriangularSolution => "no feasible triangular solution",
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Sample rate must be finite and > 0
    InvalidSampleRate(f64),
    /// Simulation duration must be finite and > 0
    InvalidDuration(f64),
    /// Invalid soft limits (min must be < max)
    InvalidSoftLimits {
        /// Minimum limit value
        min: f64,
        /// Maximum limit value
        max: f64,
    },
    /// Commanded goal lies outside rejecting soft limits
    GoalOutsideLimits {
        /// Requested goal
        goal: f64,
        /// Minimum limit
        min: f64,
        /// Maximum limit
        max: f64,
    },
    /// Settling tolerance must be finite and >= 0
    InvalidTolerance(f64),
    /// Command trigger time is at or after the end of the run
    TriggerBeyondDuration {
        /// Trigger time in seconds
        trigger: f64,
        /// Run duration in seconds
        duration: f64,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Command queue errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Queue capacity exhausted
    QueueFull,
    /// Another command already fires at this time
    DuplicateTrigger(f64),
    /// Trigger time must be finite and >= 0
    InvalidTriggerTime(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Plan(e) => write!(f, "Planning error: {}", e),
            Error::Schedule(e) => write!(f, "Scheduling error: {}", e),
        }
    }
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidLimit { limit, value } => {
                write!(f, "Invalid {}: {}", limit.as_str(), value)
            }
            PlanError::GoalTooClose {
                stopping_distance,
                available,
            } => write!(
                f,
                "Goal too close: stopping needs {} but only {} remains",
                stopping_distance, available
            ),
            PlanError::NoFeasibleTriangularSolution => {
                write!(f, "No feasible triangular profile for this move")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSampleRate(v) => write!(f, "Invalid sample rate: {}. Must be > 0", v),
            ConfigError::InvalidDuration(v) => write!(f, "Invalid duration: {}. Must be > 0", v),
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "Invalid soft limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::GoalOutsideLimits { goal, min, max } => {
                write!(f, "Goal {} outside limits [{}, {}]", goal, min, max)
            }
            ConfigError::InvalidTolerance(v) => write!(f, "Invalid tolerance: {}. Must be >= 0", v),
            ConfigError::TriggerBeyondDuration { trigger, duration } => {
                write!(f, "Command at {} s never fires in a {} s run", trigger, duration)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::QueueFull => write!(f, "Command queue is full"),
            ScheduleError::DuplicateTrigger(t) => write!(f, "A command already fires at {} s", t),
            ScheduleError::InvalidTriggerTime(t) => write!(f, "Invalid trigger time: {}", t),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PlanError> for Error {
    fn from(e: PlanError) -> Self {
        Error::Plan(e)
    }
}

impl From<ScheduleError> for Error {
    fn from(e: ScheduleError) -> Self {
        Error::Schedule(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PlanError {}

#[cfg(feature = "std")]
impl std::error::Error for ScheduleError {}
