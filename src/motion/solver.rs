//! Segment timing for a classified move.

use crate::error::PlanError;

use super::classifier::NormalizedCase;
use super::profile::{PhaseBoundaries, Profile, ProfileShape};

/// Compute phase boundaries and accelerations for a classified move.
///
/// # Errors
///
/// Returns `PlanError::NoFeasibleTriangularSolution` when the move cannot
/// reach cruise speed and the no-cruise system has no positive-time root.
pub fn solve(case: &NormalizedCase) -> Result<Profile, PlanError> {
    if case.triangular {
        solve_triangular(case)
    } else {
        Ok(solve_trapezoidal(case))
    }
}

fn solve_trapezoidal(case: &NormalizedCase) -> Profile {
    let remaining = case.distance - case.ramp_distance - case.stop_distance;
    // Rounding at the exact cruise/triangle boundary can leave -epsilon
    let cruise_time = if remaining > 0.0 {
        remaining / case.cruise_speed
    } else {
        0.0
    };

    let t1 = case.ramp_time;
    let t2 = t1 + cruise_time;
    let t3 = t2 + case.stop_time;

    Profile {
        boundaries: PhaseBoundaries([0.0, t1, t2, t3]),
        accelerations: case.signed_accelerations(),
        direction: case.direction,
        regime: case.regime,
        shape: ProfileShape::Trapezoidal,
        peak_velocity: case.direction.sign() * case.cruise_speed,
    }
}

/// Phase 0 at rate `r` for `t1`, then phase 2 at `-d` down to rest, covering
/// exactly the goal distance `D`:
///
/// ```text
/// t1 = (sqrt(d (r + d) (2 r D + u^2)) - u (r + d)) / (r (r + d))
/// ```
///
/// The stop phase lasts `r t1 / d` for the velocity phase 0 adds, plus
/// `u / d` for the velocity the axis already carried.
fn solve_triangular(case: &NormalizedCase) -> Result<Profile, PlanError> {
    let r = case.ramp_rate;
    let d = -case.stop_rate;
    let u = case.initial_speed;
    let combined = r + d;

    // Overspeed: phase 0 already brakes, so there is no peak to trade off
    if r <= 0.0 || combined <= 0.0 {
        return Err(PlanError::NoFeasibleTriangularSolution);
    }

    let discriminant = d * combined * (2.0 * r * case.distance + u * u);
    if !(discriminant >= 0.0) {
        return Err(PlanError::NoFeasibleTriangularSolution);
    }

    // Larger root; the other one is never larger
    let t1 = (libm::sqrt(discriminant) - u * combined) / (r * combined);
    let time_to_shed_gain = r * t1 / d;
    let time_under_initial = u / d;
    let stop_time = time_to_shed_gain + time_under_initial;

    if !(t1 >= 0.0) || !(stop_time > 0.0) {
        return Err(PlanError::NoFeasibleTriangularSolution);
    }

    let sign = case.direction.sign();

    Ok(Profile {
        boundaries: PhaseBoundaries([0.0, t1, t1, t1 + stop_time]),
        accelerations: case.signed_accelerations(),
        direction: case.direction,
        regime: case.regime,
        shape: ProfileShape::Triangular,
        peak_velocity: sign * (u + r * t1),
    })
}
