//! The round image the user spins.
use druid::kurbo::Circle;
use druid::piet::InterpolationMode;
use druid::{
    Affine, BoxConstraints, Data, Env, Event, EventCtx, ImageBuf, LayoutCtx, LifeCycle, LifeCycleCtx,
    PaintCtx, RenderContext, Size, UpdateCtx, Widget,
};

use crate::rotation::RotationData;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// PodImage Widget
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Paints an image scaled to the widget's shorter side, centred, and masked to
/// a circle, then applies the data's rotation transform on top.
pub struct PodImage {
    image: ImageBuf,
}

impl PodImage {
    pub fn new(image: ImageBuf) -> Self {
        Self { image }
    }

    pub fn set_image(&mut self, image: ImageBuf) {
        self.image = image;
    }

    /// Maps image pixels into the widget before any rotation: uniform fit to
    /// `min(width, height)` per axis and centred.
    pub fn placement(&self, widget: Size) -> Option<Affine> {
        placement(self.image.size(), widget)
    }
}

fn placement(image: Size, widget: Size) -> Option<Affine> {
    let side = widget.width.min(widget.height);
    if !(side.is_finite() && side > 0.0 && image.width > 0.0 && image.height > 0.0) {
        return None;
    }

    let scale = Affine::scale_non_uniform(side / image.width, side / image.height);
    let offset = Affine::translate(((widget.width - side) / 2.0, (widget.height - side) / 2.0));
    Some(offset * scale)
}

impl<T: Data + RotationData> Widget<T> for PodImage {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut T, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &T, _env: &Env) {}

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &T, data: &T, _env: &Env) {
        if !old_data.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        if bc.is_width_bounded() && bc.is_height_bounded() {
            return bc.max();
        }
        log::warn!("Unbounded constraints passed to PodImage, falling back to the image size");
        bc.constrain(self.image.size())
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, _env: &Env) {
        let image_size = self.image.size();
        let placement = match placement(image_size, ctx.size()) {
            Some(placement) => placement,
            None => return,
        };

        let image = self.image.to_image(ctx.render_ctx);
        let rect = image_size.to_rect();
        let mask = Circle::new(rect.center(), image_size.width / 2.0);

        ctx.with_save(|ctx| {
            ctx.transform(data.get_transform() * placement);
            ctx.clip(mask);
            ctx.draw_image(&image, rect, InterpolationMode::Bilinear);
        });
    }
}
