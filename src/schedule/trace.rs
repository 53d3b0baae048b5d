//! Recorded trajectories (requires `alloc`).

use alloc::vec::Vec;

use crate::config::units::Seconds;

use super::scheduler::{CommandScheduler, Sample};

/// Equal-length columns of sample time, position, velocity and acceleration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// Sample times in seconds.
    pub times: Vec<f64>,
    /// Positions.
    pub positions: Vec<f64>,
    /// Velocities.
    pub velocities: Vec<f64>,
    /// Commanded accelerations.
    pub accelerations: Vec<f64>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trace with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            accelerations: Vec::with_capacity(capacity),
        }
    }

    /// Run `scheduler` until its next tick reaches `horizon` (or it finishes)
    /// and record every sample.
    pub fn record(scheduler: &mut CommandScheduler, horizon: Seconds) -> Self {
        let remaining = (horizon.value() - scheduler.next_time()) * scheduler.sample_rate().hz();
        let capacity = if remaining > 0.0 { libm::ceil(remaining) as usize } else { 0 };
        let mut trace = Self::with_capacity(capacity);

        while scheduler.next_time() < horizon.value() {
            match scheduler.next() {
                Some(sample) => trace.push(&sample),
                None => break,
            }
        }

        trace
    }

    /// Append one sample.
    pub fn push(&mut self, sample: &Sample) {
        self.times.push(sample.time);
        self.positions.push(sample.position);
        self.velocities.push(sample.velocity);
        self.accelerations.push(sample.acceleration);
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if no samples were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Get the sample at `index`.
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            time: *self.times.get(index)?,
            position: *self.positions.get(index)?,
            velocity: *self.velocities.get(index)?,
            acceleration: *self.accelerations.get(index)?,
        })
    }

    /// Get the last sample.
    pub fn last(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterate over samples in order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }
}

impl Extend<Sample> for Trace {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(&sample);
        }
    }
}

impl FromIterator<Sample> for Trace {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut trace = Self::new();
        trace.extend(iter);
        trace
    }
}
