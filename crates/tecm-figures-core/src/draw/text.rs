//! Text definitions for labels, titles and annotations.
//!
//! - [`TextDefinition`] - Reusable text style (font, weight, slant, color,
//!   anchor, optional badge background)
//! - [`Text`] - A renderable text element placed at a canvas point
//!
//! Text is always vertically centered on its anchor point; the horizontal
//! alignment comes from [`TextAnchor`]. Multi-line content is split on `\n`
//! and rendered as one `<tspan>` per line.
//!
//! ```
//! # use tecm_figures_core::draw::{FontWeight, Text, TextDefinition};
//! # use tecm_figures_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(12.0);
//! style.set_font_weight(FontWeight::Bold);
//!
//! let text = Text::new(style, "Model I", Point::new(10.0, 23.2));
//! assert!(text.measured_size().width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{
        Drawable, LayeredOutput, POINTS_PER_UNIT, RenderLayer, StrokeDefinition, Viewport,
        viewport::round2,
    },
    geometry::{Bounds, Insets, Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_SPACING: f32 = 1.2;

/// Font weight of a text element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font slant of a text element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The text starts at the anchor point
    Start,
    /// The text is centered on the anchor point
    #[default]
    Middle,
    /// The text ends at the anchor point
    End,
}

impl TextAnchor {
    fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A rounded, bordered background drawn behind text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBackground {
    fill: Color,
    border: StrokeDefinition,
}

impl TextBackground {
    /// Creates a background with the given fill and border.
    pub fn new(fill: Color, border: StrokeDefinition) -> Self {
        Self { fill, border }
    }
}

/// Defines the visual style of a text element.
///
/// | Property   | Default |
/// |------------|---------|
/// | Font family | `"DejaVu Sans"` |
/// | Font size  | `10` points |
/// | Weight     | normal |
/// | Style      | normal |
/// | Color      | `None` (SVG default, black) |
/// | Anchor     | middle |
/// | Background | `None` |
/// | Padding    | zero, in points |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    style: FontStyle,
    color: Option<Color>,
    anchor: TextAnchor,
    background: Option<TextBackground>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "DejaVu Sans", "Helvetica").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the font slant.
    pub fn set_font_style(&mut self, style: FontStyle) {
        self.style = style;
    }

    /// Sets the text color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal anchor.
    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Sets a badge background. The badge corner radius equals the largest
    /// padding value.
    pub fn set_background(&mut self, background: Option<TextBackground>) {
        self.background = background;
    }

    /// Sets the padding around the text in points.
    ///
    /// Padding grows the badge background and the reported bounds.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the font family.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the horizontal anchor.
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_SPACING
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "DejaVu Sans".to_string(),
            font_size: 10.0,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            color: None,
            anchor: TextAnchor::default(),
            background: None,
            padding: Insets::default(),
        }
    }
}

/// A text element placed at an anchor point on the canvas.
#[derive(Debug, Clone)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
}

impl Text {
    /// Creates a new text element.
    pub fn new(definition: TextDefinition, content: impl Into<String>, position: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            position,
        }
    }

    /// Returns the anchor point.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size of the text content in points, without padding.
    ///
    /// The width comes from shaping with the system fonts; the height is the
    /// number of lines times the line height, so it does not depend on which
    /// fonts are installed.
    pub fn measured_size(&self) -> Size {
        if self.content.is_empty() {
            return Size::default();
        }
        let width = TEXT_MANAGER
            .get_or_init(TextManager::new)
            .measure_width(&self.content, &self.definition);
        let height = self.line_count() as f32 * self.definition.line_height();
        Size::new(width, height)
    }

    fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }

    /// Returns the padded size in points.
    fn padded_size(&self) -> Size {
        self.measured_size().add_padding(self.definition.padding)
    }
}

impl Drawable for Text {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let anchor = viewport.to_svg(self.position);
        let definition = &self.definition;

        let lines: Vec<&str> = self.content.lines().collect();
        let line_height = definition.line_height();
        let total_height = lines.len() as f32 * line_height;
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", anchor.x())
            .set("y", round2(anchor.y() + y_offset))
            .set("text-anchor", definition.anchor.to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size())
            .set("font-weight", definition.weight.to_svg_value())
            .set("font-style", definition.style.to_svg_value());

        if let Some(color) = &definition.color {
            rendered_text = rendered_text
                .set("fill", color.to_hex())
                .set("fill-opacity", color.alpha());
        }

        // Absolute baselines: renderers drop the `dy` of an empty tspan.
        for (index, line) in lines.iter().enumerate() {
            let y = round2(anchor.y() + y_offset + (index + 1) as f32 * line_height);
            let tspan = svg_element::TSpan::new("")
                .set("x", anchor.x())
                .set("y", y)
                .add(SvgText::new(*line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(background) = &definition.background {
            let (origin, size) = viewport.to_svg_rect(self.bounds());
            let radius = definition
                .padding
                .top()
                .max(definition.padding.left());

            let badge = svg_element::Rectangle::new()
                .set("x", origin.x())
                .set("y", origin.y())
                .set("width", size.width())
                .set("height", size.height())
                .set("rx", radius)
                .set("ry", radius)
                .set("fill", background.fill.to_hex())
                .set("fill-opacity", background.fill.alpha());
            let badge = crate::apply_stroke!(badge, &background.border);

            output.add_to_layer(RenderLayer::Patch, Box::new(badge));
        }

        output.add_to_layer(RenderLayer::Annotation, Box::new(rendered_text));
        output
    }

    /// Bounds in canvas units, including padding.
    fn bounds(&self) -> Bounds {
        let size = self.padded_size().scale(1.0 / POINTS_PER_UNIT);
        let center_x = match self.definition.anchor {
            TextAnchor::Start => self.position.x() + size.width() / 2.0,
            TextAnchor::Middle => self.position.x(),
            TextAnchor::End => self.position.x() - size.width() / 2.0,
        };
        Bounds::new_from_center(Point::new(center_x, self.position.y()), size)
    }
}

/// Measures text with a shared `FontSystem`, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Width in points of the widest line of `text`.
    ///
    /// Falls back to an estimate of 0.55 em per character when no glyphs were
    /// shaped, which happens on hosts without any installed fonts.
    fn measure_width(&self, text: &str, text_def: &TextDefinition) -> f32 {
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let font_size = text_def.font_size();
        let metrics = Metrics::new(font_size, text_def.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = match text_def.weight {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        };
        let style = match text_def.style {
            FontStyle::Normal => Style::Normal,
            FontStyle::Italic => Style::Italic,
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight)
            .style(style);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let max_width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|last| last.x + last.w))
            .fold(0.0_f32, f32::max);

        if max_width > 0.0 {
            max_width
        } else {
            let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            widest as f32 * font_size * 0.55
        }
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
