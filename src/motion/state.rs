//! Kinematic state of the axis.

/// Position and velocity of the axis at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    /// Position in axis units.
    pub position: f64,
    /// Velocity in axis units per second.
    pub velocity: f64,
}

impl KinematicState {
    /// Create a new state.
    #[inline]
    pub const fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// At rest at the given position.
    #[inline]
    pub const fn at_rest(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }

    /// Signed displacement from this state to `goal`.
    #[inline]
    pub fn displacement_to(&self, goal: f64) -> f64 {
        goal - self.position
    }

    /// Whether the axis sits at `goal` and is stopped, within tolerances.
    #[inline]
    pub fn is_settled_at(&self, goal: f64, position_tolerance: f64, velocity_tolerance: f64) -> bool {
        libm::fabs(goal - self.position) <= position_tolerance
            && libm::fabs(self.velocity) <= velocity_tolerance
    }
}
