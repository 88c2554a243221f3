//! Pointer velocity estimation for releasing into a fling.
use druid::{Point, Vec2};

/// Below this on both axes a release is a plain drop, not a fling.
pub const MIN_FLING_VELOCITY: f64 = 50.0;
/// Each axis is clamped to this before it drives a fling.
pub const MAX_FLING_VELOCITY: f64 = 8_000.0;

const HISTORY_SIZE: usize = 20;
/// Samples older than this, relative to the newest, are ignored.
const HORIZON_MS: f64 = 100.0;
/// A pointer that rests this long before release has stopped.
const ASSUME_STOPPED_MS: f64 = 40.0;
/// Recent samples weigh more.
const RECENCY_DECAY: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    time_ms: f64,
    position: Point,
}

/// Ring buffer of recent pointer positions.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    pub fn add(&mut self, time_ms: f64, position: Point) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in pixels per second, zero with fewer than two usable samples.
    pub fn velocity(&self) -> Vec2 {
        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return Vec2::ZERO,
        };

        // (age in ms, newest-relative offset), newest first
        let mut window: Vec<(f64, Vec2)> = Vec::with_capacity(HISTORY_SIZE);
        let mut previous_time = newest.time_ms;
        let mut current = self.index;
        loop {
            let sample = match self.samples[current] {
                Some(sample) => sample,
                None => break,
            };
            let age = newest.time_ms - sample.time_ms;
            if age > HORIZON_MS {
                break;
            }
            if window.len() == 1 && previous_time - sample.time_ms > ASSUME_STOPPED_MS {
                // Rested on the last position before lifting.
                return Vec2::ZERO;
            }
            previous_time = sample.time_ms;
            window.push((-age, sample.position - newest.position));

            if window.len() == HISTORY_SIZE {
                break;
            }
            current = if current == 0 { HISTORY_SIZE - 1 } else { current - 1 };
        }

        if window.len() < 2 {
            return Vec2::ZERO;
        }

        Vec2::new(
            weighted_slope(window.iter().map(|(t, offset)| (*t, offset.x))),
            weighted_slope(window.iter().map(|(t, offset)| (*t, offset.y))),
        ) * 1000.0
    }
}

/// Least squares slope of `(t, x)` pairs, newest first, in units per ms.
fn weighted_slope(points: impl Iterator<Item = (f64, f64)>) -> f64 {
    let mut sum_w = 0.0;
    let mut sum_t = 0.0;
    let mut sum_x = 0.0;
    let mut sum_tt = 0.0;
    let mut sum_tx = 0.0;

    for (i, (t, x)) in points.enumerate() {
        let w = RECENCY_DECAY.powi(i as i32);
        sum_w += w;
        sum_t += w * t;
        sum_x += w * x;
        sum_tt += w * t * t;
        sum_tx += w * t * x;
    }

    let denominator = sum_w * sum_tt - sum_t * sum_t;
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }
    (sum_w * sum_tx - sum_t * sum_x) / denominator
}

/// Applies the platform fling gate: `None` when the release is too slow on
/// both axes, otherwise the velocity with each axis clamped to `max`.
pub fn fling_velocity(velocity: Vec2, min: f64, max: f64) -> Option<Vec2> {
    if velocity.x.abs() <= min && velocity.y.abs() <= min {
        return None;
    }
    Some(Vec2::new(velocity.x.clamp(-max, max), velocity.y.clamp(-max, max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }

    #[test]
    fn empty_or_single_sample_is_still() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        tracker.add(0.0, Point::new(10.0, 10.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn constant_motion_is_measured_exactly() {
        let mut tracker = VelocityTracker::new();
        // 2 px right and 1 px down every 10 ms
        for step in 0..8 {
            let t = step as f64 * 10.0;
            tracker.add(t, Point::new(100.0 + 2.0 * step as f64, 50.0 + step as f64));
        }
        let velocity = tracker.velocity();
        assert!(approx(velocity.x, 200.0, 1e-6), "{:?}", velocity);
        assert!(approx(velocity.y, 100.0, 1e-6), "{:?}", velocity);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker::new();
        // Fast leftwards long ago, then slow rightwards
        tracker.add(0.0, Point::new(500.0, 0.0));
        tracker.add(10.0, Point::new(0.0, 0.0));
        for step in 0..5 {
            let t = 500.0 + step as f64 * 10.0;
            tracker.add(t, Point::new(step as f64, 0.0));
        }
        let velocity = tracker.velocity();
        assert!(approx(velocity.x, 100.0, 1e-6), "{:?}", velocity);
    }

    #[test]
    fn pause_before_release_is_still() {
        let mut tracker = VelocityTracker::new();
        for step in 0..5 {
            tracker.add(step as f64 * 10.0, Point::new(step as f64 * 20.0, 0.0));
        }
        tracker.add(95.0, Point::new(80.0, 0.0));
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn reset_forgets_samples() {
        let mut tracker = VelocityTracker::new();
        tracker.add(0.0, Point::new(0.0, 0.0));
        tracker.add(10.0, Point::new(10.0, 0.0));
        tracker.reset();
        assert_eq!(tracker.velocity(), Vec2::ZERO);
    }

    #[test]
    fn ring_buffer_wraps() {
        let mut tracker = VelocityTracker::new();
        for step in 0..(HISTORY_SIZE * 3) {
            tracker.add(step as f64 * 4.0, Point::new(0.0, step as f64 * 2.0));
        }
        let velocity = tracker.velocity();
        assert!(approx(velocity.y, 500.0, 1e-6), "{:?}", velocity);
    }

    #[test]
    fn fling_gate() {
        assert_eq!(fling_velocity(Vec2::new(10.0, -49.0), 50.0, 8000.0), None);
        assert_eq!(
            fling_velocity(Vec2::new(10.0, -60.0), 50.0, 8000.0),
            Some(Vec2::new(10.0, -60.0))
        );
        assert_eq!(
            fling_velocity(Vec2::new(-20_000.0, 9_000.0), 50.0, 8000.0),
            Some(Vec2::new(-8000.0, 8000.0))
        );
    }
}
