//! Drawable Components for Figure Rendering
//!
//! Every element that can appear on a figure implements [`Drawable`]: it
//! renders itself into a [`LayeredOutput`] for a given [`Viewport`] and
//! reports its bounds in canvas units.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation. A labeled box, for instance, puts its outline in the
//! patch layer and its label in the annotation layer, so arrows drawn later
//! still pass under every label but over every box.
mod arrow;
mod layer;
mod legend;
mod rounded_box;
mod stroke;
mod text;
mod viewport;

pub use arrow::{Arrow, ArrowDefinition, ArrowDrawer, ArrowHead, Curvature};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use legend::{COLOR_SWATCH_SIZE, LINE_SWATCH_LENGTH, LegendEntry, LegendItem, Swatch};
pub use rounded_box::{BoxDefinition, DEFAULT_BOX_PAD, DEFAULT_CORNER_RADIUS, RoundedBox};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontStyle, FontWeight, Text, TextAnchor, TextBackground, TextDefinition};
pub use viewport::{POINTS_PER_UNIT, Viewport};

use crate::geometry::Bounds;

/// Trait for elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// Positions are already part of the drawable; the viewport maps them
    /// from canvas units into SVG user space.
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput;

    /// Returns the area covered by this drawable, in canvas units.
    fn bounds(&self) -> Bounds;
}
