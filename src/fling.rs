///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Imports
//
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::Vec2;

use crate::config::PodConfig;
use crate::quadrant::{Quadrant, QuadrantFlags};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Constants
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// A fling stops once its velocity is at or below this.
pub const STOP_VELOCITY: f64 = 5.0;
/// Velocity is divided by this to get the degrees rotated in one frame.
pub const DEGREES_DIVISOR: f64 = 75.0;
/// Velocity is divided by this after every frame.
pub const DECAY_FACTOR: f64 = 1.0667;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Direction
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Whether a release from `start` to `end` has to spin against the sign of
/// `velocity.x + velocity.y`.
///
/// The angle wraps at 0/360 and the summed screen velocity changes meaning
/// between quadrants, so these combinations are corrected by hand. The table
/// is empirical; keep it as is.
pub fn fling_inverts(start: Quadrant, end: Quadrant, velocity: Vec2, quadrants: &QuadrantFlags) -> bool {
    use Quadrant::*;

    let third_touched = quadrants.is_touched(Third);
    let (vx, vy) = (velocity.x.abs(), velocity.y.abs());

    match (start, end) {
        (Second, Second) => vx < vy,
        (Third, Third) => true,
        (First, Third) => true,
        (Fourth, Fourth) => vx > vy,
        (Second, Third) | (Third, Second) => true,
        (Third, Fourth) | (Fourth, Third) => true,
        (Second, Fourth) | (Fourth, Second) => third_touched,
        _ => false,
    }
}

/// Scalar fling velocity with the direction correction applied.
pub fn signed_fling_velocity(start: Quadrant, end: Quadrant, velocity: Vec2, quadrants: &QuadrantFlags) -> f64 {
    let summed = velocity.x + velocity.y;
    if fling_inverts(start, end, velocity, quadrants) {
        -summed
    } else {
        summed
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// FlingTask
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Rotation that keeps going after release, one step per animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingTask {
    velocity: f64,
    stop_velocity: f64,
    degrees_divisor: f64,
    decay: f64,
    running: bool,
}

impl FlingTask {
    pub fn new(velocity: f64, config: &PodConfig) -> Self {
        Self {
            velocity,
            stop_velocity: config.stop_velocity,
            degrees_divisor: config.degrees_divisor,
            decay: config.decay,
            running: true,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one frame. Returns the degrees to rotate, or `None` once the fling
    /// is over. A locked tick ends the fling for good.
    pub fn tick(&mut self, allow_rotating: bool) -> Option<f64> {
        if !self.running {
            return None;
        }

        if !self.velocity.is_finite() || self.velocity.abs() <= self.stop_velocity || !allow_rotating {
            self.running = false;
            return None;
        }

        let degrees = self.velocity / self.degrees_divisor;
        self.velocity /= self.decay;
        Some(degrees)
    }
}
