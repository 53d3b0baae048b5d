//! Fixed-step trajectory integration.

use super::state::KinematicState;

/// Second-order (midpoint) integrator for one axis.
///
/// Each step splits the interval in two: the first half advances velocity
/// with the previous acceleration, position moves with that midpoint
/// velocity, and the second half advances velocity with the new
/// acceleration. Stepwise acceleration changes at phase boundaries then cost
/// half a sample of error instead of a full one.
#[derive(Debug, Clone)]
pub struct Integrator {
    state: KinematicState,
    last_time: f64,
    last_acceleration: f64,
}

impl Integrator {
    /// Create an integrator at time zero.
    pub fn new(initial: KinematicState) -> Self {
        Self::starting_at(initial, 0.0)
    }

    /// Create an integrator whose clock starts at `t0`.
    pub fn starting_at(initial: KinematicState, t0: f64) -> Self {
        Self {
            state: initial,
            last_time: t0,
            last_acceleration: 0.0,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> KinematicState {
        self.state
    }

    /// Time of the last step.
    #[inline]
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Acceleration applied at the last step.
    #[inline]
    pub fn last_acceleration(&self) -> f64 {
        self.last_acceleration
    }

    /// State that [`step`](Self::step) would return, without advancing.
    pub fn predict(&self, acceleration: f64, t: f64) -> KinematicState {
        let dt = t - self.last_time;
        if dt <= 0.0 {
            return self.state;
        }

        let half = 0.5 * dt;
        let midpoint_velocity = self.state.velocity + self.last_acceleration * half;
        KinematicState {
            position: self.state.position + midpoint_velocity * dt,
            velocity: midpoint_velocity + acceleration * half,
        }
    }

    /// Advance to time `t` where the commanded acceleration is `acceleration`.
    ///
    /// A `t` at or before the last step only records the acceleration.
    pub fn step(&mut self, acceleration: f64, t: f64) -> KinematicState {
        if t > self.last_time {
            self.state = self.predict(acceleration, t);
            self.last_time = t;
        }

        self.last_acceleration = acceleration;
        self.state
    }
}
