///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Imports
//
///////////////////////////////////////////////////////////////////////////////////////////////////
use crate::fling::{DECAY_FACTOR, DEGREES_DIVISOR, STOP_VELOCITY};
use crate::velocity::{MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// PodConfig
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tuning for the rotation gesture. Velocities are in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PodConfig {
    /// Without fling the pod only follows the pointer while it is down.
    pub fling_enabled: bool,
    pub stop_velocity: f64,
    pub degrees_divisor: f64,
    pub decay: f64,
    pub min_fling_velocity: f64,
    pub max_fling_velocity: f64,
}

impl PodConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fling(mut self, enabled: bool) -> Self {
        self.fling_enabled = enabled;
        self
    }

    pub fn with_stop_velocity(mut self, velocity: f64) -> Self {
        self.stop_velocity = velocity;
        self
    }

    pub fn with_degrees_divisor(mut self, divisor: f64) -> Self {
        self.degrees_divisor = divisor;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_fling_velocity_range(mut self, min: f64, max: f64) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }
}

impl Default for PodConfig {
    fn default() -> Self {
        Self {
            fling_enabled: true,
            stop_velocity: STOP_VELOCITY,
            degrees_divisor: DEGREES_DIVISOR,
            decay: DECAY_FACTOR,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_fling_constants() {
        let config = PodConfig::default();
        assert!(config.fling_enabled);
        assert_eq!(config.stop_velocity, 5.0);
        assert_eq!(config.degrees_divisor, 75.0);
        assert_eq!(config.decay, 1.0667);
    }

    #[test]
    fn builders_override_fields() {
        let config = PodConfig::new()
            .with_fling(false)
            .with_stop_velocity(1.0)
            .with_fling_velocity_range(10.0, 100.0);
        assert!(!config.fling_enabled);
        assert_eq!(config.stop_velocity, 1.0);
        assert_eq!(config.min_fling_velocity, 10.0);
        assert_eq!(config.max_fling_velocity, 100.0);
        assert_eq!(config.decay, DECAY_FACTOR);
    }
}
