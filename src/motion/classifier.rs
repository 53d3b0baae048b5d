//! Profile classification.
//!
//! Everything is rotated into a frame where the goal lies in the positive
//! direction. In that frame the initial velocity `u` falls into one of four
//! regimes, and each regime fixes the phase-0 rate. Phase 2 always stops the
//! axis at the deceleration limit. The direction sign is applied once, when
//! the rates leave this module.

use super::command::MoveCommand;
use super::profile::Direction;
use super::state::KinematicState;

/// Initial velocity relative to the goal and the velocity limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VelocityRegime {
    /// Toward the goal (or at rest), at or below the velocity limit.
    /// Phase 0 accelerates at the acceleration limit.
    Approaching,
    /// Toward the goal, faster than the velocity limit.
    /// Phase 0 brakes down to the limit at the deceleration limit.
    Overspeed,
    /// Away from the goal, at or below the velocity limit.
    /// Phase 0 brakes, crosses zero and accelerates toward the goal.
    Receding,
    /// Away from the goal, faster than the velocity limit.
    /// Same single phase-0 ramp as `Receding`, just a longer braking share.
    Reversing,
}

impl VelocityRegime {
    /// Classify a rotated-frame velocity `u` against the cruise speed.
    pub fn from_rotated(u: f64, velocity_limit: f64) -> Self {
        if u >= 0.0 {
            if u > velocity_limit {
                VelocityRegime::Overspeed
            } else {
                VelocityRegime::Approaching
            }
        } else if -u > velocity_limit {
            VelocityRegime::Reversing
        } else {
            VelocityRegime::Receding
        }
    }

    /// Rotated-frame phase-0 rate for this regime.
    ///
    /// The receding regimes brake and then accelerate inside one phase, so
    /// they take the smaller limit and respect both sides of the zero
    /// crossing.
    pub fn ramp_rate(self, acceleration: f64, deceleration: f64) -> f64 {
        match self {
            VelocityRegime::Approaching => acceleration,
            VelocityRegime::Overspeed => -deceleration,
            VelocityRegime::Receding | VelocityRegime::Reversing => {
                if acceleration < deceleration {
                    acceleration
                } else {
                    deceleration
                }
            }
        }
    }

    /// Whether the initial velocity points at the goal.
    pub fn is_toward_goal(self) -> bool {
        matches!(self, VelocityRegime::Approaching | VelocityRegime::Overspeed)
    }

    /// Short lowercase name, used in log messages.
    pub fn as_str(self) -> &'static str {
        match self {
            VelocityRegime::Approaching => "approaching",
            VelocityRegime::Overspeed => "overspeed",
            VelocityRegime::Receding => "receding",
            VelocityRegime::Reversing => "reversing",
        }
    }
}

/// A move expressed in the rotated frame, ready for the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCase {
    /// Regime of the initial velocity.
    pub regime: VelocityRegime,
    /// Sign applied to everything on the way out.
    pub direction: Direction,
    /// Distance to the goal, `|goal - position|`.
    pub distance: f64,
    /// Initial velocity along the direction of travel.
    pub initial_speed: f64,
    /// Commanded cruise speed.
    pub cruise_speed: f64,
    /// Phase-0 rate (rotated, signed).
    pub ramp_rate: f64,
    /// Phase-2 rate (rotated, always negative).
    pub stop_rate: f64,
    /// Time for phase 0 to reach cruise speed.
    pub ramp_time: f64,
    /// Distance covered by phase 0 when it reaches cruise speed.
    pub ramp_distance: f64,
    /// Time for phase 2 to stop from cruise speed.
    pub stop_time: f64,
    /// Distance covered by phase 2 from cruise speed.
    pub stop_distance: f64,
    /// Cruise speed cannot be reached; use the no-cruise solution.
    pub triangular: bool,
}

impl NormalizedCase {
    /// Phase accelerations in the world frame.
    pub fn signed_accelerations(&self) -> [f64; 3] {
        let sign = self.direction.sign();
        [sign * self.ramp_rate, 0.0, sign * self.stop_rate]
    }

    /// Relative goal displacement in the world frame.
    pub fn signed_distance(&self) -> f64 {
        self.direction.sign() * self.distance
    }
}

/// Classify a move and normalize its signs.
///
/// Expects limits that already passed [`super::validator::validate_limits`].
pub fn classify(state: &KinematicState, cmd: &MoveCommand) -> NormalizedCase {
    let displacement = state.displacement_to(cmd.goal_position);
    let direction = Direction::from_displacement(displacement);
    let sign = direction.sign();

    let distance = sign * displacement;
    let u = sign * state.velocity;
    let cruise = cmd.velocity_limit;

    let regime = VelocityRegime::from_rotated(u, cruise);
    let ramp_rate = regime.ramp_rate(cmd.acceleration, cmd.deceleration);
    let stop_rate = -cmd.deceleration;

    let ramp_time = (cruise - u) / ramp_rate;
    let ramp_distance = 0.5 * ramp_rate * ramp_time * ramp_time + u * ramp_time;

    let stop_time = cruise / cmd.deceleration;
    let stop_distance = 0.5 * cmd.deceleration * stop_time * stop_time;

    NormalizedCase {
        regime,
        direction,
        distance,
        initial_speed: u,
        cruise_speed: cruise,
        ramp_rate,
        stop_rate,
        ramp_time,
        ramp_distance,
        stop_time,
        stop_distance,
        triangular: ramp_distance + stop_distance > distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_boundaries() {
        assert_eq!(VelocityRegime::from_rotated(0.0, 5.0), VelocityRegime::Approaching);
        assert_eq!(VelocityRegime::from_rotated(5.0, 5.0), VelocityRegime::Approaching);
        assert_eq!(VelocityRegime::from_rotated(5.1, 5.0), VelocityRegime::Overspeed);
        assert_eq!(VelocityRegime::from_rotated(-5.0, 5.0), VelocityRegime::Receding);
        assert_eq!(VelocityRegime::from_rotated(-5.1, 5.0), VelocityRegime::Reversing);
    }

    #[test]
    fn test_cruise_from_rest() {
        let case = classify(&KinematicState::default(), &MoveCommand::new(6.0, 8.0, 5.0, 120.0));

        assert_eq!(case.regime, VelocityRegime::Approaching);
        assert_eq!(case.direction, Direction::Positive);
        assert!(!case.triangular);
        assert_eq!(case.signed_accelerations(), [6.0, 0.0, -8.0]);
        assert!((case.ramp_time - 5.0 / 6.0).abs() < 1e-12);
        assert!((case.stop_distance - 25.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_overspeed_toward_negative_goal() {
        // Goal behind, already heading there faster than the limit
        let state = KinematicState::new(150.0, -12.0);
        let case = classify(&state, &MoveCommand::new(2.0, 4.0, 5.0, 100.0));

        assert_eq!(case.regime, VelocityRegime::Overspeed);
        assert_eq!(case.direction, Direction::Negative);
        assert_eq!(case.initial_speed, 12.0);
        assert_eq!(case.signed_distance(), -50.0);

        // First phase pushes against the negative velocity, last phase too
        let [ramp, cruise, stop] = case.signed_accelerations();
        assert_eq!(ramp, 4.0);
        assert_eq!(cruise, 0.0);
        assert_eq!(stop, 4.0);
        assert!((case.ramp_time - 7.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_receding_uses_smaller_limit() {
        let state = KinematicState::new(0.0, -3.0);
        let case = classify(&state, &MoveCommand::new(6.0, 2.0, 5.0, 100.0));

        assert_eq!(case.regime, VelocityRegime::Receding);
        assert_eq!(case.ramp_rate, 2.0);
        assert!((case.ramp_time - 4.0).abs() < 1e-12);
        // Braking 3 back to 0 then reaching 5: (25 - 9) / (2 * 2)
        assert!((case.ramp_distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_reversing_regime() {
        let state = KinematicState::new(10.0, 8.0);
        let case = classify(&state, &MoveCommand::new(1.0, 3.0, 5.0, 0.0));

        assert_eq!(case.regime, VelocityRegime::Reversing);
        assert_eq!(case.direction, Direction::Negative);
        assert_eq!(case.initial_speed, -8.0);
        assert_eq!(case.signed_accelerations(), [-1.0, 0.0, 3.0]);
        assert!(!case.regime.is_toward_goal());
    }

    #[test]
    fn test_triangular_flag() {
        // Reaching 20 at 2 takes 100 units; only 10 available
        let case = classify(&KinematicState::at_rest(120.0), &MoveCommand::new(2.0, 4.0, 20.0, 110.0));

        assert!(case.triangular);
        assert_eq!(case.direction, Direction::Negative);
    }

    #[test]
    fn test_boundary_routes_to_cruise() {
        // 2 units up, 2 units down, 4 available: zero cruise but not triangular
        let case = classify(&KinematicState::default(), &MoveCommand::new(1.0, 1.0, 2.0, 4.0));

        assert_eq!(case.ramp_distance + case.stop_distance, case.distance);
        assert!(!case.triangular);
    }
}
