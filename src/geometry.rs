//! Touch-to-angle resolution around the pod's center.
use druid::{Point, Size, Vec2};

use crate::quadrant::Quadrant;

/// The laid-out dimensions of the pod widget.
///
/// Only exists once layout has reported a non-zero size, so code holding a
/// `PodGeometry` never divides by a zero dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PodGeometry {
    size: Size,
}

impl PodGeometry {
    pub fn new(size: Size) -> Option<Self> {
        let usable = |side: f64| side.is_finite() && side > 0.0;
        if usable(size.width) && usable(size.height) {
            Some(Self { size })
        } else {
            None
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Widget-space center, the pivot of every rotation.
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Moves a widget-local point into center-relative coordinates with y up.
    pub fn to_center_relative(&self, point: Point) -> Vec2 {
        let half_width = self.size.width / 2.0;
        let half_height = self.size.height / 2.0;
        Vec2::new(
            point.x - half_width,
            self.size.height - point.y - half_height,
        )
    }

    pub fn quadrant_at(&self, point: Point) -> Quadrant {
        let relative = self.to_center_relative(point);
        Quadrant::of(relative.x, relative.y)
    }

    /// Angle in degrees, within [0, 360), of the vector from the center to
    /// `point`, counter-clockwise from +x. The center itself resolves to 0.
    pub fn angle_at(&self, point: Point) -> f64 {
        let relative = self.to_center_relative(point);
        let radius = relative.x.hypot(relative.y);
        if radius == 0.0 || !radius.is_finite() {
            return 0.0;
        }

        let raw = (relative.y / radius).clamp(-1.0, 1.0).asin().to_degrees();
        let angle = match Quadrant::of(relative.x, relative.y) {
            Quadrant::First => raw,
            Quadrant::Second => 180.0 - raw,
            Quadrant::Third => 180.0 - raw,
            Quadrant::Fourth => 360.0 + raw,
        };

        // -0.0 in the fourth quadrant lands exactly on 360
        if angle >= 360.0 {
            0.0
        } else {
            angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn square() -> PodGeometry {
        PodGeometry::new(Size::new(200.0, 200.0)).unwrap()
    }

    // Widget-local point for a center-relative (x, y-up) offset.
    fn at(geometry: &PodGeometry, x: f64, y: f64) -> Point {
        let center = geometry.center();
        Point::new(center.x + x, center.y - y)
    }

    #[test]
    fn zero_or_infinite_size_has_no_geometry() {
        assert!(PodGeometry::new(Size::ZERO).is_none());
        assert!(PodGeometry::new(Size::new(100.0, 0.0)).is_none());
        assert!(PodGeometry::new(Size::new(0.0, 100.0)).is_none());
        assert!(PodGeometry::new(Size::new(f64::INFINITY, 100.0)).is_none());
        assert!(PodGeometry::new(Size::new(100.0, 50.0)).is_some());
    }

    #[test]
    fn screen_y_is_flipped() {
        let geometry = PodGeometry::new(Size::new(100.0, 60.0)).unwrap();
        let relative = geometry.to_center_relative(Point::new(0.0, 0.0));
        assert_eq!(relative, Vec2::new(-50.0, 30.0));
        assert_eq!(geometry.quadrant_at(Point::new(0.0, 0.0)), Quadrant::Second);
        assert_eq!(geometry.quadrant_at(Point::new(100.0, 60.0)), Quadrant::Fourth);
    }

    #[test]
    fn cardinal_and_diagonal_angles() {
        let g = square();
        assert!((g.angle_at(at(&g, 10.0, 0.0)) - 0.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, 10.0, 10.0)) - 45.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, 0.0, 10.0)) - 90.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, -10.0, 10.0)) - 135.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, -10.0, 0.0)) - 180.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, -10.0, -10.0)) - 225.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, 0.0, -10.0)) - 270.0).abs() < EPSILON);
        assert!((g.angle_at(at(&g, 10.0, -10.0)) - 315.0).abs() < EPSILON);
    }

    #[test]
    fn angles_stay_in_range() {
        let g = square();
        for step in 0..720 {
            let theta = (step as f64 * 0.5).to_radians();
            let angle = g.angle_at(at(&g, 50.0 * theta.cos(), 50.0 * theta.sin()));
            assert!((0.0..360.0).contains(&angle), "angle {} out of range", angle);
        }
    }

    #[test]
    fn continuous_except_at_the_wrap() {
        let g = square();
        let small = 0.01;
        assert!(g.angle_at(at(&g, 10.0, small)) < 0.1);
        assert!((g.angle_at(at(&g, -10.0, small)) - 180.0).abs() < 0.1);
        assert!(g.angle_at(at(&g, 10.0, -small)) > 359.9);
    }

    #[test]
    fn center_touch_resolves_to_zero() {
        let g = square();
        let angle = g.angle_at(g.center());
        assert!(!angle.is_nan());
        assert_eq!(angle, 0.0);
    }
}
