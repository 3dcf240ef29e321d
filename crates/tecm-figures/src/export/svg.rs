//! SVG document rendering.

use log::{debug, trace};
use svg::{Document, node::element as svg_element};

use tecm_figures_core::{
    color::Color,
    draw::{ArrowDrawer, Drawable, LayeredOutput, Viewport},
    geometry::{Bounds, Insets},
};

use crate::canvas::Primitive;

/// Margin added around the drawn content, in canvas units.
pub const EXPORT_PAD: f32 = 0.1;

/// Builds the SVG document for a list of primitives.
#[derive(Debug)]
pub(crate) struct SvgRenderer {
    background: Color,
    arrow_drawer: ArrowDrawer,
}

impl SvgRenderer {
    pub(crate) fn new(background: Color) -> Self {
        Self {
            background,
            arrow_drawer: ArrowDrawer::new(),
        }
    }

    /// Renders the primitives of a canvas covering `canvas_bounds`.
    pub(crate) fn render(mut self, canvas_bounds: Bounds, primitives: &[Primitive]) -> Document {
        let extent = content_extent(canvas_bounds, primitives);
        debug!(
            min_x = extent.min_x(),
            min_y = extent.min_y(),
            width = extent.width(),
            height = extent.height();
            "Export extent computed"
        );

        let viewport = Viewport::new(extent);
        let svg_size = viewport.svg_size();

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        let background = svg_element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", svg_size.width())
            .set("height", svg_size.height())
            .set("fill", self.background.to_hex())
            .set("fill-opacity", self.background.alpha());
        let mut doc = doc.add(background);

        let mut output = LayeredOutput::new();
        for primitive in primitives {
            if let Primitive::Arrow(arrow) = primitive {
                self.arrow_drawer.register(arrow);
            }
            output.merge(primitive.render_to_layers(&viewport));
        }

        if self.arrow_drawer.marker_count() > 0 {
            doc = doc.add(self.arrow_drawer.draw_marker_definitions());
        }

        let doc = output.render().into_iter().fold(doc, |doc, node| doc.add(node));
        trace!(primitives = primitives.len(); "SVG document rendered");
        doc
    }
}

/// The canvas bounds merged with the bounds of every primitive, padded by
/// [`EXPORT_PAD`].
pub(crate) fn content_extent(canvas_bounds: Bounds, primitives: &[Primitive]) -> Bounds {
    primitives
        .iter()
        .fold(canvas_bounds, |acc, primitive| acc.merge(&primitive.bounds()))
        .add_padding(Insets::uniform(EXPORT_PAD))
}
