///////////////////////////////////////////////////////////////////////////////////////////////////
//
// Imports
//
///////////////////////////////////////////////////////////////////////////////////////////////////
use std::time::Instant;

use druid::{widget::Controller, Affine, Data, Env, Event, EventCtx, Lens, Point, Vec2, Widget};

use crate::config::PodConfig;
use crate::gesture::PodGesture;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationData
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub trait RotationData {
    fn get_transform(&self) -> Affine;
    fn set_transform(&mut self, transform: Affine);

    /// Post-multiplies a rotation of `degrees` about `center`. Positive
    /// degrees turn clockwise on screen.
    fn rotate_about(&mut self, degrees: f64, center: Point) {
        let pivot = center.to_vec2();
        let rotation = Affine::translate(pivot) * Affine::rotate(degrees.to_radians()) * Affine::translate(-pivot);
        self.set_transform(rotation * self.get_transform());
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationState
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// The pod's accumulated transform. Lives in the app data so it outlives the
/// widget that edits it.
#[derive(Clone, Data, Lens, PartialEq, Debug)]
pub struct RotationState {
    #[data(eq)]
    pub transform: Affine,
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            transform: Affine::IDENTITY,
        }
    }

    pub fn reset(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    /// Net clockwise rotation in degrees, within [0, 360).
    pub fn angle(&self) -> f64 {
        let [a, b, _, _, _, _] = self.transform.as_coeffs();
        let degrees = b.atan2(a).to_degrees().rem_euclid(360.0);
        if degrees >= 360.0 {
            0.0
        } else {
            degrees
        }
    }

    pub fn translation(&self) -> Vec2 {
        let [_, _, _, _, x, y] = self.transform.as_coeffs();
        Vec2::new(x, y)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationData for RotationState {
    fn get_transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// RotationController
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Spins its child with the pointer and keeps spinning after a fast release.
pub struct RotationController {
    gesture: PodGesture,
    epoch: Instant,
}

impl RotationController {
    pub fn new(config: PodConfig) -> Self {
        Self {
            gesture: PodGesture::new(config),
            epoch: Instant::now(),
        }
    }

    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(PodConfig::default())
    }
}

impl<T: Data + RotationData, W: Widget<T>> Controller<T, W> for RotationController {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        child.event(ctx, event, data, env);

        if ctx.is_handled() {
            return;
        }

        self.gesture.set_size(ctx.size());
        let center = match self.gesture.geometry() {
            Some(geometry) => geometry.center(),
            None => return,
        };

        match event {
            Event::MouseDown(mouse_event) => {
                if mouse_event.button.is_left() {
                    self.gesture.touch_down(mouse_event.pos, self.now_ms());
                    ctx.set_active(true);
                    ctx.set_handled();
                }
            }
            Event::MouseMove(mouse_event) => {
                if ctx.is_active() {
                    if let Some(degrees) = self.gesture.touch_move(mouse_event.pos, self.now_ms()) {
                        data.rotate_about(degrees, center);
                        ctx.request_paint();
                    }
                    ctx.set_handled();
                }
            }
            Event::MouseUp(mouse_event) => {
                if ctx.is_active() && mouse_event.button.is_left() {
                    ctx.set_active(false);
                    if self.gesture.touch_up(mouse_event.pos, self.now_ms()) {
                        ctx.request_anim_frame();
                    }
                    ctx.set_handled();
                }
            }
            Event::AnimFrame(_) => {
                if let Some(degrees) = self.gesture.tick() {
                    data.rotate_about(degrees, center);
                    ctx.request_paint();
                    ctx.request_anim_frame();
                }
            }
            _ => {}
        }
    }
}
