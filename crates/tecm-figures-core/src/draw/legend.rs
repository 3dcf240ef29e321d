//! Legend swatches.
//!
//! A [`LegendEntry`] describes one key of a legend: a short line sample or a
//! small colored square, followed by a label. [`LegendItem`] places an entry
//! on the canvas.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{
        Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextAnchor, TextDefinition,
        Viewport,
    },
    geometry::{Bounds, Point, Size},
};

/// Length of a line swatch in canvas units.
pub const LINE_SWATCH_LENGTH: f32 = 0.8;

/// Size of a color swatch in canvas units.
pub const COLOR_SWATCH_SIZE: Size = Size::new(0.4, 0.3);

/// Distance from the swatch origin to the label of a line swatch.
const LINE_LABEL_OFFSET: f32 = 1.0;

/// Distance from the swatch origin to the label of a color swatch.
const COLOR_LABEL_OFFSET: f32 = 0.5;

const SWATCH_BORDER: &str = "#666666";

/// The sample drawn before a legend label.
#[derive(Debug, Clone, PartialEq)]
pub enum Swatch {
    /// A short line in the given stroke
    Line(StrokeDefinition),
    /// A filled square with a grey border
    Color(Color),
}

/// One key of a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    swatch: Swatch,
    label: String,
    text: TextDefinition,
}

impl LegendEntry {
    /// Creates a line-style entry.
    pub fn line(stroke: StrokeDefinition, label: impl Into<String>) -> Self {
        Self::new(Swatch::Line(stroke), label.into())
    }

    /// Creates a color entry.
    pub fn color(fill: Color, label: impl Into<String>) -> Self {
        Self::new(Swatch::Color(fill), label.into())
    }

    fn new(swatch: Swatch, label: String) -> Self {
        let mut text = TextDefinition::new();
        text.set_font_size(8.0);
        text.set_anchor(TextAnchor::Start);
        Self {
            swatch,
            label,
            text,
        }
    }

    /// Returns the entry with a different label style. The anchor is always
    /// reset to start so the label follows the swatch.
    pub fn with_text(mut self, mut text: TextDefinition) -> Self {
        text.set_anchor(TextAnchor::Start);
        self.text = text;
        self
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the label style.
    pub fn text(&self) -> &TextDefinition {
        &self.text
    }
}

/// A legend entry placed with its swatch starting at `origin`, vertically
/// centered on `origin.y`.
#[derive(Debug, Clone)]
pub struct LegendItem {
    entry: LegendEntry,
    origin: Point,
}

impl LegendItem {
    pub fn new(entry: LegendEntry, origin: Point) -> Self {
        Self { entry, origin }
    }

    fn label(&self) -> Text {
        let offset = match self.entry.swatch {
            Swatch::Line(_) => LINE_LABEL_OFFSET,
            Swatch::Color(_) => COLOR_LABEL_OFFSET,
        };
        Text::new(
            self.entry.text.clone(),
            self.entry.label.clone(),
            self.origin.with_x(self.origin.x() + offset),
        )
    }

    fn swatch_bounds(&self) -> Bounds {
        match self.entry.swatch {
            Swatch::Line(_) => Bounds::from_points(
                self.origin,
                self.origin.with_x(self.origin.x() + LINE_SWATCH_LENGTH),
            ),
            Swatch::Color(_) => Bounds::new_from_corner(
                self.origin
                    .with_y(self.origin.y() - COLOR_SWATCH_SIZE.height() / 2.0),
                COLOR_SWATCH_SIZE,
            ),
        }
    }
}

impl Drawable for LegendItem {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        match &self.entry.swatch {
            Swatch::Line(stroke) => {
                let start = viewport.to_svg(self.origin);
                let end = viewport.to_svg(self.origin.with_x(self.origin.x() + LINE_SWATCH_LENGTH));
                let line = svg_element::Line::new()
                    .set("x1", start.x())
                    .set("y1", start.y())
                    .set("x2", end.x())
                    .set("y2", end.y());
                let line = crate::apply_stroke!(line, stroke);
                output.add_to_layer(RenderLayer::Line, Box::new(line));
            }
            Swatch::Color(fill) => {
                let (origin, size) = viewport.to_svg_rect(self.swatch_bounds());
                let border = StrokeDefinition::solid(
                    Color::new(SWATCH_BORDER).unwrap_or_default(),
                    1.0,
                );
                let rect = svg_element::Rectangle::new()
                    .set("x", origin.x())
                    .set("y", origin.y())
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", fill.to_hex())
                    .set("fill-opacity", fill.alpha());
                let rect = crate::apply_stroke!(rect, &border);
                output.add_to_layer(RenderLayer::Patch, Box::new(rect));
            }
        }

        output.merge(self.label().render_to_layers(viewport));
        output
    }

    fn bounds(&self) -> Bounds {
        self.swatch_bounds().merge(&self.label().bounds())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Bounds::new_from_corner(
            Point::new(0.0, -1.0),
            Size::new(20.0, 29.0),
        ))
    }

    fn render_to_string(item: &LegendItem) -> String {
        item.render_to_layers(&viewport())
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_line_swatch_renders_in_line_layer() {
        let stroke = StrokeDefinition::dashed(Color::new("#D32F2F").unwrap(), 2.0);
        let item = LegendItem::new(
            LegendEntry::line(stroke, "Feedback Loop"),
            Point::new(4.5, -0.35),
        );
        let rendered = render_to_string(&item);

        assert!(rendered.contains("data-layer=\"line\""));
        assert!(rendered.contains("<line"));
        assert!(rendered.contains("stroke-dasharray=\"7.4,3.2\""));
        assert!(rendered.contains("Feedback Loop"));
    }

    #[test]
    fn test_color_swatch_is_bordered_square() {
        let item = LegendItem::new(
            LegendEntry::color(Color::new("#E3F2FD").unwrap(), "Model I"),
            Point::new(8.5, -0.35),
        );
        let rendered = render_to_string(&item);

        assert!(rendered.contains("fill=\"#e3f2fd\""));
        assert!(rendered.contains("stroke=\"#666666\""));
        assert!(rendered.contains("width=\"28.8\""));
    }

    #[test]
    fn test_label_is_start_anchored_after_swatch() {
        let item = LegendItem::new(
            LegendEntry::color(Color::default(), "State Var."),
            Point::new(16.5, -0.35),
        );
        let label = item.label();

        assert_approx_eq!(f32, label.position().x(), 17.0);
        assert!(render_to_string(&item).contains("text-anchor=\"start\""));
    }

    #[test]
    fn test_bounds_cover_swatch() {
        let item = LegendItem::new(
            LegendEntry::color(Color::default(), "Model II"),
            Point::new(11.0, -0.35),
        );
        let bounds = item.bounds();

        assert_approx_eq!(f32, bounds.min_x(), 11.0);
        assert_approx_eq!(f32, bounds.min_y(), -0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_with_text_keeps_start_anchor() {
        let mut text = TextDefinition::new();
        text.set_anchor(TextAnchor::Middle);
        let entry = LegendEntry::color(Color::default(), "x").with_text(text);

        assert_eq!(entry.text().anchor(), TextAnchor::Start);
    }
}
