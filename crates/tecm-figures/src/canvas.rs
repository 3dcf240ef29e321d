//! The drawing surface for one figure.
//!
//! A [`Canvas`] is a bounded coordinate space in abstract units (origin at
//! the bottom-left, Y growing upward) holding an append-only list of
//! primitives. Each primitive call validates its arguments, appends exactly
//! one primitive and never touches earlier ones. Layout is entirely up to the
//! caller: there is no automatic placement, collision avoidance or scaling.
//!
//! # Phases
//!
//! A canvas starts out accepting primitives. The first successful
//! [`export`](Canvas::export) seals it; drawing afterwards fails with
//! [`FigureError::Sealed`], while exporting to further formats is still
//! allowed.
//!
//! # Example
//!
//! ```no_run
//! use tecm_figures::{ArrowStyle, BoxStyle, Canvas, OutputFormat};
//! use tecm_figures_core::geometry::Point;
//!
//! let mut canvas = Canvas::new(20.0, 28.0)?;
//! let task = canvas.draw_box(1.0, 1.0, 4.0, 1.0, "Test", &BoxStyle::default())?;
//! canvas.draw_arrow(task.top(), Point::new(3.0, 5.0), &ArrowStyle::default())?;
//! canvas.export("figure.svg", OutputFormat::Svg, 300)?;
//! # Ok::<(), tecm_figures::FigureError>(())
//! ```

use std::path::Path;

use log::{debug, info};

use tecm_figures_core::{
    color::Color,
    draw::{
        Arrow, ArrowDefinition, ArrowHead, BoxDefinition, Curvature, DEFAULT_CORNER_RADIUS,
        Drawable, FontStyle, FontWeight, LayeredOutput, LegendEntry, LegendItem, RoundedBox,
        StrokeDefinition, StrokeStyle, Text, TextAnchor, TextBackground, TextDefinition, Viewport,
    },
    geometry::{Bounds, Insets, Point, Size},
};

use crate::{
    error::FigureError,
    export::{self, OutputFormat, png, svg::SvgRenderer},
};

/// Badge padding of a section title, as a multiple of its font size.
const TITLE_PADDING_RATIO: f32 = 0.3;

/// Border width of a section title badge, in points.
const TITLE_BORDER_WIDTH: f32 = 2.0;

/// Style of a labeled box.
///
/// | Property   | Default     |
/// |------------|-------------|
/// | Fill       | `white`     |
/// | Border     | `#333333`   |
/// | Font size  | 9 points    |
/// | Bold       | no          |
/// | Rounded    | yes         |
/// | Line width | 1.5 points  |
/// | Alpha      | 0.9         |
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    fill: String,
    border: String,
    font_size: f32,
    bold: bool,
    rounded: bool,
    line_width: f32,
    alpha: f32,
}

impl BoxStyle {
    /// Creates a box style with the given fill and border colors.
    pub fn new(fill: impl Into<String>, border: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            border: border.into(),
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: "white".to_string(),
            border: "#333333".to_string(),
            font_size: 9.0,
            bold: false,
            rounded: true,
            line_width: 1.5,
            alpha: 0.9,
        }
    }
}

/// Style of an arrow.
///
/// Defaults to a straight, solid `#333333` arrow of 1.5 points with an open
/// head.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowStyle {
    color: String,
    head: ArrowHead,
    curvature: Curvature,
    line_width: f32,
    line_style: StrokeStyle,
}

impl ArrowStyle {
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_head(mut self, head: ArrowHead) -> Self {
        self.head = head;
        self
    }

    pub fn with_curvature(mut self, curvature: Curvature) -> Self {
        self.curvature = curvature;
        self
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_line_style(mut self, line_style: StrokeStyle) -> Self {
        self.line_style = line_style;
        self
    }
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: "#333333".to_string(),
            head: ArrowHead::Open,
            curvature: Curvature::STRAIGHT,
            line_width: 1.5,
            line_style: StrokeStyle::Solid,
        }
    }
}

/// Style of a free text annotation.
///
/// Defaults to 10 point, normal weight, upright, black, centered text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    font_size: f32,
    bold: bool,
    italic: bool,
    color: Option<String>,
    anchor: TextAnchor,
}

impl TextStyle {
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            bold: false,
            italic: false,
            color: None,
            anchor: TextAnchor::Middle,
        }
    }
}

/// Style of a panel, a label-less backdrop rectangle.
///
/// Defaults to a white, opaque, rounded panel with a solid 1 point
/// `#cccccc` border.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    fill: String,
    border: String,
    line_width: f32,
    line_style: StrokeStyle,
    corner_radius: f32,
    alpha: f32,
}

impl PanelStyle {
    /// Creates a panel style with the given fill and border colors.
    pub fn new(fill: impl Into<String>, border: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            border: border.into(),
            ..Self::default()
        }
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_line_style(mut self, line_style: StrokeStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Sets the corner radius in canvas units; zero gives square corners.
    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            fill: "white".to_string(),
            border: "#cccccc".to_string(),
            line_width: 1.0,
            line_style: StrokeStyle::Solid,
            corner_radius: DEFAULT_CORNER_RADIUS,
            alpha: 1.0,
        }
    }
}

/// Placement of a drawn box, for attaching arrows to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHandle {
    bounds: Bounds,
}

impl BoxHandle {
    /// The box rectangle as passed to [`Canvas::draw_box`].
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Midpoint of the top edge.
    pub fn top(&self) -> Point {
        Point::new(self.bounds.center().x(), self.bounds.max_y())
    }

    /// Midpoint of the bottom edge.
    pub fn bottom(&self) -> Point {
        Point::new(self.bounds.center().x(), self.bounds.min_y())
    }

    /// Midpoint of the left edge.
    pub fn left(&self) -> Point {
        Point::new(self.bounds.min_x(), self.bounds.center().y())
    }

    /// Midpoint of the right edge.
    pub fn right(&self) -> Point {
        Point::new(self.bounds.max_x(), self.bounds.center().y())
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}

/// An element of the display list.
#[derive(Debug, Clone)]
pub(crate) enum Primitive {
    Box(RoundedBox),
    Panel(RoundedBox),
    Arrow(Arrow),
    Text(Text),
    Legend(LegendItem),
}

impl Drawable for Primitive {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        match self {
            Self::Box(shape) | Self::Panel(shape) => shape.render_to_layers(viewport),
            Self::Arrow(arrow) => arrow.render_to_layers(viewport),
            Self::Text(text) => text.render_to_layers(viewport),
            Self::Legend(item) => item.render_to_layers(viewport),
        }
    }

    fn bounds(&self) -> Bounds {
        match self {
            Self::Box(shape) | Self::Panel(shape) => shape.bounds(),
            Self::Arrow(arrow) => arrow.bounds(),
            Self::Text(text) => text.bounds(),
            Self::Legend(item) => item.bounds(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Accepting,
    Exported,
}

/// A bounded drawing surface with an append-only display list.
#[derive(Debug)]
pub struct Canvas {
    size: Size,
    font_family: String,
    background: Color,
    primitives: Vec<Primitive>,
    phase: Phase,
}

impl Canvas {
    /// Creates an empty canvas of `width` × `height` units.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] unless both dimensions are
    /// positive and finite.
    pub fn new(width: f32, height: f32) -> Result<Self, FigureError> {
        let size = Size::new(width, height);
        if !size.is_positive() {
            return Err(FigureError::invalid(format!(
                "canvas size must be positive, got {width} x {height}"
            )));
        }
        debug!(width, height; "Canvas created");
        Ok(Self {
            size,
            font_family: TextDefinition::new().font_family().to_string(),
            background: Color::new("white").unwrap_or_default(),
            primitives: Vec::new(),
            phase: Phase::Accepting,
        })
    }

    /// Sets the font family used by every label drawn afterwards.
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Sets the background color of exported documents.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Returns the nominal canvas bounds.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_corner(Point::default(), self.size)
    }

    /// Returns the number of primitives drawn so far.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Returns true once the canvas has been exported.
    pub fn is_sealed(&self) -> bool {
        self.phase == Phase::Exported
    }

    /// Draws a box with its lower-left corner at (`x`, `y`) and `text`
    /// centered inside. `text` may contain `\n` line breaks; an empty text
    /// draws no label.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for a non-positive size,
    /// non-positive font size, alpha outside `0..=1`, negative line width or
    /// an unparseable color, and [`FigureError::Sealed`] after export.
    pub fn draw_box(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        text: &str,
        style: &BoxStyle,
    ) -> Result<BoxHandle, FigureError> {
        self.ensure_accepting()?;
        let bounds = rect_bounds(x, y, w, h)?;
        check_font_size(style.font_size)?;
        check_alpha(style.alpha)?;
        check_line_width(style.line_width)?;

        let fill = parse_color(&style.fill)?.with_alpha(style.alpha);
        let border = StrokeDefinition::solid(parse_color(&style.border)?, style.line_width)
            .with_alpha(style.alpha);
        let mut definition = BoxDefinition::new(fill, border);
        if !style.rounded {
            definition = definition.with_corner_radius(0.0);
        }

        let label = (!text.is_empty()).then(|| {
            let mut text_def = self.text_definition(style.font_size);
            if style.bold {
                text_def.set_font_weight(FontWeight::Bold);
            }
            Text::new(text_def, text, bounds.center())
        });

        self.push(Primitive::Box(RoundedBox::new(definition, bounds, label)));
        Ok(BoxHandle { bounds })
    }

    /// Draws an arrow from `start` to `end` with its head at `end`.
    /// `start == end` is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for non-finite points, a
    /// negative line width or an unparseable color, and
    /// [`FigureError::Sealed`] after export.
    pub fn draw_arrow(
        &mut self,
        start: Point,
        end: Point,
        style: &ArrowStyle,
    ) -> Result<(), FigureError> {
        self.ensure_accepting()?;
        check_point(start)?;
        check_point(end)?;
        check_line_width(style.line_width)?;
        if !style.curvature.rad().is_finite() {
            return Err(FigureError::invalid("arrow curvature must be finite"));
        }

        let stroke = StrokeDefinition::solid(parse_color(&style.color)?, style.line_width)
            .with_style(style.line_style.clone());
        let definition = ArrowDefinition::new(stroke)
            .with_head(style.head)
            .with_curvature(style.curvature);

        self.push(Primitive::Arrow(Arrow::new(definition, start, end)));
        Ok(())
    }

    /// Draws a section title: bold `text` in `color`, centered at
    /// (`x`, `y`) on a white rounded badge bordered in the same color.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for a non-finite position,
    /// non-positive font size or an unparseable color, and
    /// [`FigureError::Sealed`] after export.
    pub fn draw_section_title(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: &str,
        font_size: f32,
    ) -> Result<(), FigureError> {
        self.ensure_accepting()?;
        let position = Point::new(x, y);
        check_point(position)?;
        check_font_size(font_size)?;
        let color = parse_color(color)?;

        let mut text_def = self.text_definition(font_size);
        text_def.set_font_weight(FontWeight::Bold);
        text_def.set_color(Some(color));
        text_def.set_background(Some(TextBackground::new(
            Color::new("white").unwrap_or_default(),
            StrokeDefinition::solid(color, TITLE_BORDER_WIDTH),
        )));
        text_def.set_padding(Insets::uniform(TITLE_PADDING_RATIO * font_size));

        self.push(Primitive::Text(Text::new(text_def, text, position)));
        Ok(())
    }

    /// Draws free text anchored at (`x`, `y`).
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for a non-finite position,
    /// non-positive font size or an unparseable color, and
    /// [`FigureError::Sealed`] after export.
    pub fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), FigureError> {
        self.ensure_accepting()?;
        let position = Point::new(x, y);
        check_point(position)?;
        check_font_size(style.font_size)?;

        let mut text_def = self.text_definition(style.font_size);
        text_def.set_anchor(style.anchor);
        if style.bold {
            text_def.set_font_weight(FontWeight::Bold);
        }
        if style.italic {
            text_def.set_font_style(FontStyle::Italic);
        }
        if let Some(color) = &style.color {
            text_def.set_color(Some(parse_color(color)?));
        }

        self.push(Primitive::Text(Text::new(text_def, text, position)));
        Ok(())
    }

    /// Draws a label-less panel with its lower-left corner at (`x`, `y`).
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for a non-positive size,
    /// alpha outside `0..=1`, negative line width or corner radius, or an
    /// unparseable color, and [`FigureError::Sealed`] after export.
    pub fn draw_panel(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        style: &PanelStyle,
    ) -> Result<(), FigureError> {
        self.ensure_accepting()?;
        let bounds = rect_bounds(x, y, w, h)?;
        check_alpha(style.alpha)?;
        check_line_width(style.line_width)?;
        if !(style.corner_radius.is_finite() && style.corner_radius >= 0.0) {
            return Err(FigureError::invalid(format!(
                "corner radius must be non-negative, got {}",
                style.corner_radius
            )));
        }

        let fill = parse_color(&style.fill)?.with_alpha(style.alpha);
        let border = StrokeDefinition::solid(parse_color(&style.border)?, style.line_width)
            .with_style(style.line_style.clone())
            .with_alpha(style.alpha);
        let definition = BoxDefinition::new(fill, border).with_corner_radius(style.corner_radius);

        self.push(Primitive::Panel(RoundedBox::new(definition, bounds, None)));
        Ok(())
    }

    /// Draws a legend entry whose swatch starts at `x` and is vertically
    /// centered on `y`.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for a non-finite position and
    /// [`FigureError::Sealed`] after export.
    pub fn draw_legend_entry(
        &mut self,
        x: f32,
        y: f32,
        entry: &LegendEntry,
    ) -> Result<(), FigureError> {
        self.ensure_accepting()?;
        let origin = Point::new(x, y);
        check_point(origin)?;

        let mut text_def = entry.text().clone();
        text_def.set_font_family(&self.font_family);
        let entry = entry.clone().with_text(text_def);

        self.push(Primitive::Legend(LegendItem::new(entry, origin)));
        Ok(())
    }

    /// Renders the SVG document in memory.
    pub fn render_svg(&self) -> String {
        SvgRenderer::new(self.background)
            .render(self.bounds(), &self.primitives)
            .to_string()
    }

    /// Exports the canvas to `path`. `dpi` scales raster output and is
    /// ignored for SVG.
    ///
    /// The first successful export seals the canvas; exporting again to other
    /// formats is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidArgument`] for a zero `dpi` and
    /// [`FigureError::OutputWrite`] if the document cannot be encoded or the
    /// destination cannot be written. Nothing is left at `path` on failure.
    pub fn export(
        &mut self,
        path: impl AsRef<Path>,
        format: OutputFormat,
        dpi: u32,
    ) -> Result<(), FigureError> {
        let path = path.as_ref();
        if dpi == 0 {
            return Err(FigureError::invalid("dpi must be positive"));
        }

        let document = self.render_svg();
        let bytes = match format {
            OutputFormat::Svg => document.into_bytes(),
            OutputFormat::Png => png::rasterize(&document, dpi, &self.font_family)?,
        };
        export::write_atomic(path, &bytes)?;

        info!(path:? = path, format:% = format, primitives = self.primitives.len(); "Figure exported");
        self.phase = Phase::Exported;
        Ok(())
    }

    fn ensure_accepting(&self) -> Result<(), FigureError> {
        match self.phase {
            Phase::Accepting => Ok(()),
            Phase::Exported => Err(FigureError::Sealed),
        }
    }

    fn push(&mut self, primitive: Primitive) {
        debug!(index = self.primitives.len(), primitive:? = primitive; "Primitive added");
        self.primitives.push(primitive);
    }

    fn text_definition(&self, font_size: f32) -> TextDefinition {
        let mut text_def = TextDefinition::new();
        text_def.set_font_family(&self.font_family);
        text_def.set_font_size(font_size);
        text_def
    }
}

fn parse_color(value: &str) -> Result<Color, FigureError> {
    Color::new(value).map_err(FigureError::InvalidArgument)
}

fn rect_bounds(x: f32, y: f32, w: f32, h: f32) -> Result<Bounds, FigureError> {
    let corner = Point::new(x, y);
    check_point(corner)?;
    let size = Size::new(w, h);
    if !size.is_positive() {
        return Err(FigureError::invalid(format!(
            "size must be positive, got {w} x {h}"
        )));
    }
    Ok(Bounds::new_from_corner(corner, size))
}

fn check_point(point: Point) -> Result<(), FigureError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(FigureError::invalid(format!(
            "coordinates must be finite, got ({}, {})",
            point.x(),
            point.y()
        )))
    }
}

fn check_font_size(font_size: f32) -> Result<(), FigureError> {
    if font_size.is_finite() && font_size > 0.0 {
        Ok(())
    } else {
        Err(FigureError::invalid(format!(
            "font size must be positive, got {font_size}"
        )))
    }
}

fn check_alpha(alpha: f32) -> Result<(), FigureError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(FigureError::invalid(format!(
            "alpha must be within 0..=1, got {alpha}"
        )))
    }
}

fn check_line_width(line_width: f32) -> Result<(), FigureError> {
    if line_width.is_finite() && line_width >= 0.0 {
        Ok(())
    } else {
        Err(FigureError::invalid(format!(
            "line width must be non-negative, got {line_width}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(20.0, 28.0).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_canvas() {
        assert!(matches!(
            Canvas::new(0.0, 28.0),
            Err(FigureError::InvalidArgument(_))
        ));
        assert!(matches!(
            Canvas::new(20.0, f32::NAN),
            Err(FigureError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_box_handle_anchors() {
        let mut canvas = canvas();
        let handle = canvas
            .draw_box(1.0, 21.2, 4.0, 1.5, "Task Parser", &BoxStyle::default())
            .unwrap();

        assert_approx_eq!(f32, handle.top().x(), 3.0);
        assert_approx_eq!(f32, handle.top().y(), 22.7);
        assert_approx_eq!(f32, handle.bottom().y(), 21.2);
        assert_approx_eq!(f32, handle.right().x(), 5.0);
        assert_approx_eq!(f32, handle.left().y(), 21.95);
        assert_eq!(handle.center(), handle.bounds().center());
    }

    #[test]
    fn test_box_alpha_applies_to_fill_and_border() {
        let mut canvas = canvas();
        let style = BoxStyle::new("#E8F4FD", "#1976D2").with_alpha(0.5);
        canvas.draw_box(1.0, 1.0, 4.0, 1.0, "", &style).unwrap();
        let svg = canvas.render_svg();

        assert!(svg.contains("fill-opacity=\"0.5\""));
        assert!(svg.contains("stroke-opacity=\"0.5\""));
    }

    #[test]
    fn test_square_box_has_no_corner_radius() {
        let mut canvas = canvas();
        let style = BoxStyle::default().with_rounded(false);
        canvas.draw_box(1.0, 1.0, 4.0, 1.0, "", &style).unwrap();

        assert!(!canvas.render_svg().contains("rx="));
    }

    #[test]
    fn test_invalid_alpha_and_line_width() {
        let mut canvas = canvas();
        let bad_alpha = BoxStyle::default().with_alpha(1.5);
        let bad_width = BoxStyle::default().with_line_width(-1.0);

        assert!(canvas.draw_box(1.0, 1.0, 1.0, 1.0, "", &bad_alpha).is_err());
        assert!(canvas.draw_box(1.0, 1.0, 1.0, 1.0, "", &bad_width).is_err());
        assert_eq!(canvas.primitive_count(), 0);
    }

    #[test]
    fn test_section_title_has_badge_in_text_color() {
        let mut canvas = canvas();
        canvas
            .draw_section_title(10.0, 23.2, "Model I", "#E65100", 12.0)
            .unwrap();
        let svg = canvas.render_svg();

        assert!(svg.contains("stroke=\"#e65100\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert_eq!(canvas.primitive_count(), 1);
    }

    #[test]
    fn test_text_style() {
        let mut canvas = canvas();
        let style = TextStyle::default()
            .with_italic(true)
            .with_color("#555555")
            .with_anchor(TextAnchor::Start);
        canvas.draw_text(10.0, 26.8, "subtitle", &style).unwrap();
        let svg = canvas.render_svg();

        assert!(svg.contains("font-style=\"italic\""));
        assert!(svg.contains("fill=\"#555555\""));
        assert!(svg.contains("text-anchor=\"start\""));
    }

    #[test]
    fn test_dashed_panel() {
        let mut canvas = canvas();
        let style = PanelStyle::new("#F5F5F5", "#888888")
            .with_line_style(StrokeStyle::Dashed)
            .with_alpha(0.5);
        canvas.draw_panel(0.5, 17.2, 19.0, 2.2, &style).unwrap();

        assert!(canvas.render_svg().contains("stroke-dasharray"));
    }

    #[test]
    fn test_legend_below_origin_is_not_clipped() {
        let mut canvas = canvas();
        canvas
            .draw_legend_entry(
                1.0,
                -0.35,
                &LegendEntry::color(Color::default(), "Model I"),
            )
            .unwrap();
        let svg = canvas.render_svg();

        let view_box = svg
            .split("viewBox=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        let height: f32 = view_box.split(' ').nth(3).unwrap().parse().unwrap();

        // Swatch bottom at -0.5, canvas top at 28, plus the export pad on both sides.
        assert_approx_eq!(f32, height, 28.7 * 72.0, epsilon = 0.05);
    }

    #[test]
    fn test_render_svg_is_deterministic() {
        let build = || {
            let mut canvas = canvas();
            canvas
                .draw_arrow(
                    Point::new(1.0, 1.0),
                    Point::new(4.0, 4.0),
                    &ArrowStyle::default().with_color("#D32F2F"),
                )
                .unwrap();
            canvas
                .draw_arrow(
                    Point::new(1.0, 1.0),
                    Point::new(4.0, 1.0),
                    &ArrowStyle::default().with_head(ArrowHead::Filled),
                )
                .unwrap();
            canvas.render_svg()
        };

        assert_eq!(build(), build());
    }
}
