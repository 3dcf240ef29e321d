//! Mapping from canvas units to SVG user space.

use crate::geometry::{Bounds, Point, Size};

/// SVG user units (points) per canvas unit.
///
/// A canvas unit corresponds to one inch of the printed figure, so font sizes
/// and stroke widths given in points keep their physical size.
pub const POINTS_PER_UNIT: f32 = 72.0;

/// The visible region of a canvas and its projection into SVG coordinates.
///
/// Canvas space has its origin at the bottom-left with Y growing upward; SVG
/// space has its origin at the top-left of `extent` with Y growing downward.
///
/// # Examples
///
/// ```
/// # use tecm_figures_core::draw::Viewport;
/// # use tecm_figures_core::geometry::{Bounds, Point, Size};
/// let extent = Bounds::new_from_corner(Point::new(0.0, 0.0), Size::new(20.0, 28.0));
/// let viewport = Viewport::new(extent);
///
/// let top_left = viewport.to_svg(Point::new(0.0, 28.0));
/// assert_eq!(top_left, Point::new(0.0, 0.0));
///
/// let bottom_right = viewport.to_svg(Point::new(20.0, 0.0));
/// assert_eq!(bottom_right, Point::new(1440.0, 2016.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    extent: Bounds,
}

impl Viewport {
    /// Creates a viewport showing `extent`.
    pub fn new(extent: Bounds) -> Self {
        Self { extent }
    }

    /// Projects a canvas point into SVG user space.
    pub fn to_svg(&self, point: Point) -> Point {
        Point::new(
            round2((point.x() - self.extent.min_x()) * POINTS_PER_UNIT),
            round2((self.extent.max_y() - point.y()) * POINTS_PER_UNIT),
        )
    }

    /// Projects canvas bounds into SVG space, returning the top-left corner
    /// and the size.
    pub fn to_svg_rect(&self, bounds: Bounds) -> (Point, Size) {
        (
            self.to_svg(bounds.top_left()),
            Size::new(self.length(bounds.width()), self.length(bounds.height())),
        )
    }

    /// Converts a canvas length into SVG user units.
    pub fn length(&self, units: f32) -> f32 {
        round2(units * POINTS_PER_UNIT)
    }

    /// Returns the size of the whole viewport in SVG user units.
    pub fn svg_size(&self) -> Size {
        Size::new(
            self.length(self.extent.width()),
            self.length(self.extent.height()),
        )
    }
}

/// Rounds to two decimals; adding zero folds `-0.0` into `0.0`.
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Bounds::new_from_corner(
            Point::new(-1.0, -1.0),
            Size::new(10.0, 5.0),
        ))
    }

    #[test]
    fn test_to_svg_flips_y_and_offsets_origin() {
        let svg = viewport().to_svg(Point::new(0.0, 0.0));
        assert_approx_eq!(f32, svg.x(), 72.0);
        assert_approx_eq!(f32, svg.y(), 288.0);
    }

    #[test]
    fn test_to_svg_rect_uses_top_left() {
        let bounds = Bounds::new_from_corner(Point::new(1.0, 1.0), Size::new(4.0, 1.0));
        let (origin, size) = viewport().to_svg_rect(bounds);

        assert_approx_eq!(f32, origin.x(), 144.0);
        assert_approx_eq!(f32, origin.y(), 144.0);
        assert_approx_eq!(f32, size.width(), 288.0);
        assert_approx_eq!(f32, size.height(), 72.0);
    }

    #[test]
    fn test_svg_size() {
        let size = viewport().svg_size();
        assert_approx_eq!(f32, size.width(), 720.0);
        assert_approx_eq!(f32, size.height(), 360.0);
    }

    #[test]
    fn test_round2() {
        assert_approx_eq!(f32, round2(79.200_005), 79.2);
        assert_eq!(round2(-0.004).to_string(), "0");
    }
}
