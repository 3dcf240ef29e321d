//! Rounded rectangles with an optional centered label.
//!
//! A [`RoundedBox`] covers both labeled boxes and label-less panels. The
//! outline is drawn `pad` units outside the nominal rectangle, with corners
//! of radius `corner_radius`.

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, Viewport},
    geometry::{Bounds, Insets},
};
use svg::node::element as svg_element;

/// Default outline pad in canvas units.
pub const DEFAULT_BOX_PAD: f32 = 0.02;

/// Default corner radius in canvas units.
pub const DEFAULT_CORNER_RADIUS: f32 = 0.15;

/// Fill, border and corner geometry of a box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxDefinition {
    fill: Color,
    border: StrokeDefinition,
    corner_radius: f32,
    pad: f32,
}

impl BoxDefinition {
    /// Creates a rounded box style with the default pad and radius.
    pub fn new(fill: Color, border: StrokeDefinition) -> Self {
        Self {
            fill,
            border,
            corner_radius: DEFAULT_CORNER_RADIUS,
            pad: DEFAULT_BOX_PAD,
        }
    }

    /// Returns the style with a different corner radius (zero for square corners).
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Returns the border stroke.
    pub fn border(&self) -> &StrokeDefinition {
        &self.border
    }
}

/// A box placed on the canvas.
#[derive(Debug, Clone)]
pub struct RoundedBox {
    definition: BoxDefinition,
    bounds: Bounds,
    label: Option<Text>,
}

impl RoundedBox {
    /// Creates a box covering `bounds`. A label is centered in the box.
    pub fn new(definition: BoxDefinition, bounds: Bounds, label: Option<Text>) -> Self {
        Self {
            definition,
            bounds,
            label,
        }
    }

    /// Returns the rectangle actually outlined.
    fn outline_bounds(&self) -> Bounds {
        self.bounds.add_padding(Insets::uniform(self.definition.pad))
    }
}

impl Drawable for RoundedBox {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let outline = self.outline_bounds();
        let (origin, size) = viewport.to_svg_rect(outline);

        // SVG clamps rx to half the width but the box must stay a box.
        let max_radius = outline.width().min(outline.height()) / 2.0;
        let radius = viewport.length(self.definition.corner_radius.min(max_radius));

        let fill = self.definition.fill;
        let mut rect = svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", fill.to_hex())
            .set("fill-opacity", fill.alpha());
        if radius > 0.0 {
            rect = rect.set("rx", radius).set("ry", radius);
        }
        let rect = crate::apply_stroke!(rect, self.definition.border());

        output.add_to_layer(RenderLayer::Patch, Box::new(rect));

        if let Some(label) = &self.label {
            output.merge(label.render_to_layers(viewport));
        }

        output
    }

    fn bounds(&self) -> Bounds {
        let outline = self.outline_bounds();
        match &self.label {
            Some(label) => outline.merge(&label.bounds()),
            None => outline,
        }
    }
}
