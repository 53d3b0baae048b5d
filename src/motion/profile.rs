//! Motion profile representation.
//!
//! A profile is three constant-acceleration phases separated by the
//! boundary times `[0, t1, t2, t3]`, with zero acceleration at and after `t3`.

use super::classifier::VelocityRegime;
use super::state::KinematicState;

/// Direction of travel toward the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Goal at or above the start position.
    Positive,
    /// Goal below the start position.
    Negative,
}

impl Direction {
    /// Get direction from a signed displacement. Zero counts as positive.
    #[inline]
    pub fn from_displacement(displacement: f64) -> Self {
        if displacement >= 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }
}

/// Phase of a profile at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// Phase 0: velocity ramps from its initial value toward cruise speed.
    Ramping,
    /// Phase 1: constant velocity.
    Cruising,
    /// Phase 2: velocity ramps down to zero at the goal.
    Stopping,
    /// Profile finished.
    Complete,
}

/// Shape of the velocity curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileShape {
    /// Ramp, cruise at the velocity limit, stop.
    Trapezoidal,
    /// Ramp and stop without reaching the velocity limit.
    Triangular,
    /// Zero-duration profile: the axis already rests at the goal.
    Hold,
}

impl ProfileShape {
    /// Short lowercase name, used in log messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileShape::Trapezoidal => "trapezoidal",
            ProfileShape::Triangular => "triangular",
            ProfileShape::Hold => "hold",
        }
    }
}

/// Phase boundary times `[t0 = 0, t1, t2, t3]` in seconds from issue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseBoundaries(pub [f64; 4]);

impl PhaseBoundaries {
    /// End of phase 0.
    #[inline]
    pub fn t1(&self) -> f64 {
        self.0[1]
    }

    /// End of cruise.
    #[inline]
    pub fn t2(&self) -> f64 {
        self.0[2]
    }

    /// Total duration.
    #[inline]
    pub fn t3(&self) -> f64 {
        self.0[3]
    }

    /// Check `0 <= t1 <= t2 <= t3`.
    pub fn is_monotonic(&self) -> bool {
        self.0[0] == 0.0 && self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

/// A constant-acceleration span starting at `start_time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSegment {
    /// Start of the span, seconds from issue.
    pub start_time: f64,
    /// Acceleration held until the next segment starts.
    pub acceleration: f64,
}

/// Planned motion for one move command.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Phase boundary times.
    pub boundaries: PhaseBoundaries,

    /// Signed accelerations for `[0,t1)`, `[t1,t2)`, `[t2,t3)`.
    pub accelerations: [f64; 3],

    /// Direction of the goal relative to the start position.
    pub direction: Direction,

    /// Initial velocity regime the profile was planned under.
    pub regime: VelocityRegime,

    /// Trapezoidal, triangular or hold.
    pub shape: ProfileShape,

    /// Signed velocity reached at `t1` (cruise or triangular peak).
    pub peak_velocity: f64,
}

impl Profile {
    /// Create a zero-duration profile (no motion).
    pub fn hold() -> Self {
        Self {
            boundaries: PhaseBoundaries::default(),
            accelerations: [0.0; 3],
            direction: Direction::Positive,
            regime: VelocityRegime::Approaching,
            shape: ProfileShape::Hold,
            peak_velocity: 0.0,
        }
    }

    /// Check if this is a zero-duration profile.
    #[inline]
    pub fn is_hold(&self) -> bool {
        self.shape == ProfileShape::Hold
    }

    /// Total duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.boundaries.t3()
    }

    /// Largest acceleration magnitude over all phases.
    pub fn peak_acceleration(&self) -> f64 {
        self.accelerations
            .iter()
            .fold(0.0, |peak, a| libm::fmax(peak, libm::fabs(*a)))
    }

    /// Duration of the constant-velocity phase.
    #[inline]
    pub fn cruise_duration(&self) -> f64 {
        self.boundaries.t2() - self.boundaries.t1()
    }

    /// Get the phase at time `t` (seconds from issue).
    pub fn phase_at(&self, t: f64) -> MotionPhase {
        let b = &self.boundaries;
        if t < b.t1() {
            MotionPhase::Ramping
        } else if t < b.t2() {
            MotionPhase::Cruising
        } else if t < b.t3() {
            MotionPhase::Stopping
        } else {
            MotionPhase::Complete
        }
    }

    /// Commanded acceleration at time `t` (seconds from issue).
    pub fn acceleration_at(&self, t: f64) -> f64 {
        match self.phase_at(t) {
            MotionPhase::Ramping => self.accelerations[0],
            MotionPhase::Cruising => self.accelerations[1],
            MotionPhase::Stopping => self.accelerations[2],
            MotionPhase::Complete => 0.0,
        }
    }

    /// The three segments in order. The final boundary is `boundaries.t3()`.
    pub fn segments(&self) -> [MotionSegment; 3] {
        let b = &self.boundaries.0;
        [
            MotionSegment {
                start_time: b[0],
                acceleration: self.accelerations[0],
            },
            MotionSegment {
                start_time: b[1],
                acceleration: self.accelerations[1],
            },
            MotionSegment {
                start_time: b[2],
                acceleration: self.accelerations[2],
            },
        ]
    }

    /// Exact position and velocity at time `t`, starting from `initial`.
    ///
    /// Times before issue are clamped to zero. After `t3` the axis coasts
    /// at whatever velocity remains.
    pub fn state_at(&self, initial: KinematicState, t: f64) -> KinematicState {
        let t = if t > 0.0 { t } else { 0.0 };
        let b = &self.boundaries.0;
        let mut state = initial;

        for (k, &accel) in self.accelerations.iter().enumerate() {
            let end = if t < b[k + 1] { t } else { b[k + 1] };
            let span = end - b[k];
            if span > 0.0 {
                state.position += state.velocity * span + 0.5 * accel * span * span;
                state.velocity += accel * span;
            }
        }

        if t > b[3] {
            state.position += state.velocity * (t - b[3]);
        }

        state
    }

    /// Exact state at the end of the profile.
    #[inline]
    pub fn end_state(&self, initial: KinematicState) -> KinematicState {
        self.state_at(initial, self.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_made_trapezoid() -> Profile {
        // a = 2, v = 4, d = 2, 20 units: 2 s ramp, 3 s cruise, 2 s stop
        Profile {
            boundaries: PhaseBoundaries([0.0, 2.0, 5.0, 7.0]),
            accelerations: [2.0, 0.0, -2.0],
            direction: Direction::Positive,
            regime: VelocityRegime::Approaching,
            shape: ProfileShape::Trapezoidal,
            peak_velocity: 4.0,
        }
    }

    #[test]
    fn test_hold_profile() {
        let profile = Profile::hold();

        assert!(profile.is_hold());
        assert_eq!(profile.duration(), 0.0);
        assert_eq!(profile.phase_at(0.0), MotionPhase::Complete);
        assert_eq!(profile.acceleration_at(0.0), 0.0);
    }

    #[test]
    fn test_phase_lookup() {
        let profile = hand_made_trapezoid();

        assert_eq!(profile.phase_at(0.0), MotionPhase::Ramping);
        assert_eq!(profile.phase_at(1.999), MotionPhase::Ramping);
        assert_eq!(profile.phase_at(2.0), MotionPhase::Cruising);
        assert_eq!(profile.phase_at(5.0), MotionPhase::Stopping);
        assert_eq!(profile.phase_at(7.0), MotionPhase::Complete);

        assert_eq!(profile.acceleration_at(1.0), 2.0);
        assert_eq!(profile.acceleration_at(3.0), 0.0);
        assert_eq!(profile.acceleration_at(6.0), -2.0);
        assert_eq!(profile.acceleration_at(100.0), 0.0);
    }

    #[test]
    fn test_closed_form_state() {
        let profile = hand_made_trapezoid();
        let start = KinematicState::at_rest(10.0);

        let at_t1 = profile.state_at(start, 2.0);
        assert!((at_t1.position - 14.0).abs() < 1e-12);
        assert!((at_t1.velocity - 4.0).abs() < 1e-12);

        let end = profile.end_state(start);
        assert!((end.position - 30.0).abs() < 1e-12);
        assert!(end.velocity.abs() < 1e-12);

        // Coasting past the end changes nothing once stopped
        let later = profile.state_at(start, 50.0);
        assert!((later.position - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_segments_and_boundaries() {
        let profile = hand_made_trapezoid();
        let segments = profile.segments();

        assert_eq!(segments[1].start_time, 2.0);
        assert_eq!(segments[2].acceleration, -2.0);
        assert!(profile.boundaries.is_monotonic());
        assert!((profile.cruise_duration() - 3.0).abs() < 1e-12);
        assert!(!PhaseBoundaries([0.0, 3.0, 2.0, 4.0]).is_monotonic());
        assert_eq!(profile.peak_acceleration(), 2.0);
        assert_eq!(Profile::hold().peak_acceleration(), 0.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::from_displacement(5.0), Direction::Positive);
        assert_eq!(Direction::from_displacement(0.0), Direction::Positive);
        assert_eq!(Direction::from_displacement(-5.0), Direction::Negative);
        assert_eq!(Direction::Negative.sign(), -1.0);
    }
}
