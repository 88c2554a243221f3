///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Imports
//
///////////////////////////////////////////////////////////////////////////////////////////////////
use druid::{Data, Point, Size};

use crate::config::PodConfig;
use crate::fling::{signed_fling_velocity, FlingTask};
use crate::geometry::PodGeometry;
use crate::quadrant::{Quadrant, QuadrantFlags};
use crate::velocity::{fling_velocity, VelocityTracker};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// GestureState
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, PartialEq, Data, Debug)]
pub enum GestureState {
    Idle,
    Dragging,
    Flinging,
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// PodGesture
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Turns pointer samples into rotation deltas, in degrees, for the pod.
///
/// Knows nothing about the toolkit: callers feed widget-local positions with
/// a millisecond timestamp and apply the returned deltas about
/// [`PodGeometry::center`]. Every call is a no-op until [`set_size`] has seen
/// a non-zero size.
///
/// [`set_size`]: PodGesture::set_size
pub struct PodGesture {
    config: PodConfig,
    geometry: Option<PodGeometry>,
    state: GestureState,
    previous_angle: f64,
    start_quadrant: Quadrant,
    quadrants: QuadrantFlags,
    // Cleared while a finger is down so a stale fling cannot fight the drag.
    allow_rotating: bool,
    tracker: VelocityTracker,
    fling: Option<FlingTask>,
}

impl PodGesture {
    pub fn new(config: PodConfig) -> Self {
        Self {
            config,
            geometry: None,
            state: GestureState::Idle,
            previous_angle: 0.0,
            start_quadrant: Quadrant::First,
            quadrants: QuadrantFlags::new(),
            allow_rotating: true,
            tracker: VelocityTracker::new(),
            fling: None,
        }
    }

    pub fn config(&self) -> &PodConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn geometry(&self) -> Option<PodGeometry> {
        self.geometry
    }

    pub fn is_rotation_allowed(&self) -> bool {
        self.allow_rotating
    }

    pub fn quadrants(&self) -> &QuadrantFlags {
        &self.quadrants
    }

    pub fn set_size(&mut self, size: Size) {
        self.geometry = PodGeometry::new(size);
    }

    pub fn touch_down(&mut self, position: Point, time_ms: f64) {
        let geometry = match self.geometry {
            Some(geometry) => geometry,
            None => return,
        };

        self.quadrants.reset();
        self.allow_rotating = false;
        self.previous_angle = geometry.angle_at(position);
        self.start_quadrant = geometry.quadrant_at(position);
        self.quadrants.mark(self.start_quadrant);

        self.tracker.reset();
        self.tracker.add(time_ms, position);

        if self.state == GestureState::Flinging {
            log::debug!("Touch down interrupts fling");
        }
        self.state = GestureState::Dragging;
        log::debug!("Touch down at {:.1} degrees in {:?}", self.previous_angle, self.start_quadrant);
    }

    /// Degrees to rotate for this move, `None` outside a drag.
    pub fn touch_move(&mut self, position: Point, time_ms: f64) -> Option<f64> {
        let geometry = self.geometry?;
        if self.state != GestureState::Dragging {
            return None;
        }

        let current_angle = geometry.angle_at(position);
        let delta = self.previous_angle - current_angle;
        self.previous_angle = current_angle;

        self.quadrants.mark(geometry.quadrant_at(position));
        self.tracker.add(time_ms, position);

        log::trace!("Drag to {:.1} degrees, rotating {:.2}", current_angle, delta);
        Some(delta)
    }

    /// Ends the drag. Returns whether a fling was started.
    pub fn touch_up(&mut self, position: Point, time_ms: f64) -> bool {
        let geometry = match self.geometry {
            Some(geometry) => geometry,
            None => return false,
        };
        if self.state != GestureState::Dragging {
            return false;
        }

        self.allow_rotating = true;
        let end_quadrant = geometry.quadrant_at(position);
        self.quadrants.mark(end_quadrant);
        self.tracker.add(time_ms, position);

        self.fling = None;
        self.state = GestureState::Idle;

        if !self.config.fling_enabled {
            return false;
        }

        let velocity = match fling_velocity(
            self.tracker.velocity(),
            self.config.min_fling_velocity,
            self.config.max_fling_velocity,
        ) {
            Some(velocity) => velocity,
            None => {
                log::debug!("Release without fling");
                return false;
            }
        };

        let signed = signed_fling_velocity(self.start_quadrant, end_quadrant, velocity, &self.quadrants);
        log::debug!(
            "Fling from {:?} to {:?} with velocity {:?}, spinning at {:.1}",
            self.start_quadrant,
            end_quadrant,
            velocity,
            signed
        );
        self.start_fling(signed);
        true
    }

    /// Starts a fling directly, bypassing velocity estimation.
    pub fn start_fling(&mut self, velocity: f64) {
        if self.geometry.is_none() {
            return;
        }
        self.fling = Some(FlingTask::new(velocity, &self.config));
        self.state = GestureState::Flinging;
    }

    /// One animation frame: degrees to rotate, or `None` when nothing is
    /// flinging. Once this returns `None` the fling is gone.
    pub fn tick(&mut self) -> Option<f64> {
        let fling = self.fling.as_mut()?;
        match fling.tick(self.allow_rotating) {
            Some(degrees) => Some(degrees),
            None => {
                log::debug!("Fling stopped at velocity {:.2}", fling.velocity());
                self.fling = None;
                if self.state == GestureState::Flinging {
                    self.state = GestureState::Idle;
                }
                None
            }
        }
    }
}

impl Default for PodGesture {
    fn default() -> Self {
        Self::new(PodConfig::default())
    }
}
