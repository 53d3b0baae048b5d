//! Unit types for time and sampling.
//!
//! Positions, velocities and accelerations stay plain `f64` in whatever unit
//! the axis uses (mm, degrees, ...). Time gets its own types so a sample rate
//! is never mistaken for a sample interval.

use core::ops::{Add, Sub};

use serde::Deserialize;

use crate::error::ConfigError;

/// A duration or instant in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to whole nanoseconds, saturating at `u32::MAX`.
    #[inline]
    pub fn as_nanos_u32(self) -> u32 {
        let ns = libm::round(self.0 * 1_000_000_000.0);
        if ns <= 0.0 {
            0
        } else if ns >= u32::MAX as f64 {
            u32::MAX
        } else {
            ns as u32
        }
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Seconds {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Fixed sample rate in hertz.
///
/// Validated at construction to be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleRate(f64);

impl SampleRate {
    /// Create a new SampleRate with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSampleRate` if the value is not a finite, positive number.
    pub fn new(hz: f64) -> Result<Self, ConfigError> {
        if hz.is_finite() && hz > 0.0 {
            Ok(Self(hz))
        } else {
            Err(ConfigError::InvalidSampleRate(hz))
        }
    }

    /// Get the rate in hertz.
    #[inline]
    pub const fn hz(self) -> f64 {
        self.0
    }

    /// Time between two consecutive samples.
    #[inline]
    pub fn interval(self) -> Seconds {
        Seconds(1.0 / self.0)
    }

    /// Time of the sample with the given index.
    #[inline]
    pub fn time_of(self, tick: u64) -> Seconds {
        Seconds(tick as f64 / self.0)
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for SampleRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = f64::deserialize(deserializer)?;
        SampleRate::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
}

impl UnitExt for f64 {
    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }
}
