//! Arrow drawable types and SVG marker generation.
//!
//! An [`Arrow`] is a straight or arced path from a start point to an end
//! point with an optional head at the end. Heads are SVG markers shared by
//! every arrow with the same head shape and color; [`ArrowDrawer`] collects
//! them so each definition is emitted once, in a stable order.

use std::{collections::BTreeMap, fmt, str};

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Viewport},
    geometry::{Bounds, Point},
};

/// Shape of the head drawn at the end of an arrow.
///
/// Parsed from the usual arrow-style notation:
///
/// | Notation | Variant  |
/// |----------|----------|
/// | `-`      | `None`   |
/// | `->`     | `Open`   |
/// | `-\|>`   | `Filled` |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArrowHead {
    /// Plain line, no head
    None,
    /// Open chevron
    #[default]
    Open,
    /// Filled triangle
    Filled,
}

impl ArrowHead {
    fn notation(self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Open => "->",
            Self::Filled => "-|>",
        }
    }

    fn marker_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Open => Some("open"),
            Self::Filled => Some("filled"),
        }
    }
}

impl str::FromStr for ArrowHead {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" => Ok(Self::None),
            "->" => Ok(Self::Open),
            "-|>" => Ok(Self::Filled),
            other => Err(format!(
                "invalid arrowhead `{other}`, valid values: -, ->, -|>"
            )),
        }
    }
}

impl fmt::Display for ArrowHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// Bend of an arrow as a fraction of its length.
///
/// With `m` the midpoint and `d = end - start`, the path is a quadratic
/// curve through the control point `(m.x + r·d.y, m.y − r·d.x)`. Positive
/// values bend to the right of the direction of travel, negative values to
/// the left, zero gives a straight line.
///
/// ```
/// # use tecm_figures_core::draw::Curvature;
/// let bend: Curvature = "arc3,rad=-0.3".parse().unwrap();
/// assert_eq!(bend.rad(), -0.3);
///
/// let straight: Curvature = "0".parse().unwrap();
/// assert!(straight.is_straight());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Curvature(f32);

impl Curvature {
    /// A straight line.
    pub const STRAIGHT: Self = Self(0.0);

    /// Creates a curvature from a radius fraction.
    pub fn new(rad: f32) -> Self {
        Self(rad)
    }

    /// Returns the radius fraction.
    pub fn rad(self) -> f32 {
        self.0
    }

    /// Returns true if this curvature draws a straight line.
    pub fn is_straight(self) -> bool {
        self.0 == 0.0
    }

    /// Returns the quadratic control point for a curve from `start` to `end`.
    pub fn control_point(self, start: Point, end: Point) -> Point {
        let mid = start.midpoint(end);
        let delta = end.sub_point(start);
        Point::new(mid.x() + self.0 * delta.y(), mid.y() - self.0 * delta.x())
    }
}

impl str::FromStr for Curvature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = match trimmed.strip_prefix("arc3") {
            Some(rest) => rest
                .trim_start_matches(',')
                .trim()
                .strip_prefix("rad=")
                .unwrap_or("0"),
            None => trimmed,
        };
        let rad = value
            .trim()
            .parse::<f32>()
            .map_err(|_| format!("invalid curvature `{s}`"))?;
        if !rad.is_finite() {
            return Err(format!("invalid curvature `{s}`"));
        }
        Ok(Self(rad))
    }
}

/// Visual properties of an arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDefinition {
    stroke: StrokeDefinition,
    head: ArrowHead,
    curvature: Curvature,
}

impl ArrowDefinition {
    /// Creates a straight arrow with an open head.
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            head: ArrowHead::default(),
            curvature: Curvature::STRAIGHT,
        }
    }

    /// Returns the definition with a different head.
    pub fn with_head(mut self, head: ArrowHead) -> Self {
        self.head = head;
        self
    }

    /// Returns the definition with a different curvature.
    pub fn with_curvature(mut self, curvature: Curvature) -> Self {
        self.curvature = curvature;
        self
    }

    /// Gets the arrow stroke definition
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Gets the arrowhead
    pub fn head(&self) -> ArrowHead {
        self.head
    }
}

/// An arrow placed on the canvas.
#[derive(Debug, Clone)]
pub struct Arrow {
    definition: ArrowDefinition,
    start: Point,
    end: Point,
}

impl Arrow {
    /// Creates a new arrow. `start == end` is allowed and renders a
    /// zero-length path.
    pub fn new(definition: ArrowDefinition, start: Point, end: Point) -> Self {
        Self {
            definition,
            start,
            end,
        }
    }

    fn marker_id(head: ArrowHead, color: Color) -> Option<String> {
        head.marker_name()
            .map(|name| format!("arrow-{name}-{}", color.to_id_safe_string()))
    }

    fn path_data(&self, viewport: &Viewport) -> String {
        let start = viewport.to_svg(self.start);
        let end = viewport.to_svg(self.end);
        let curvature = self.definition.curvature;

        if curvature.is_straight() {
            format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
        } else {
            let ctrl = viewport.to_svg(curvature.control_point(self.start, self.end));
            format!(
                "M {} {} Q {} {} {} {}",
                start.x(),
                start.y(),
                ctrl.x(),
                ctrl.y(),
                end.x(),
                end.y()
            )
        }
    }
}

impl Drawable for Arrow {
    fn render_to_layers(&self, viewport: &Viewport) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let stroke = self.definition.stroke();

        let path = svg_element::Path::new()
            .set("d", self.path_data(viewport))
            .set("fill", "none");
        let mut path = crate::apply_stroke!(path, stroke);

        if let Some(id) = Self::marker_id(self.definition.head, stroke.color()) {
            path = path.set("marker-end", format!("url(#{id})"));
        }

        output.add_to_layer(RenderLayer::Annotation, Box::new(path));
        output
    }

    /// The hull of the start, end and (for curves) control point.
    fn bounds(&self) -> Bounds {
        let hull = Bounds::from_points(self.start, self.end);
        if self.definition.curvature.is_straight() {
            hull
        } else {
            let ctrl = self.definition.curvature.control_point(self.start, self.end);
            hull.merge(&ctrl.to_bounds())
        }
    }
}

/// Collects the arrowhead markers used by a drawing.
///
/// Keys are marker ids, kept sorted so the emitted `<defs>` block is
/// identical from run to run.
#[derive(Debug, Default, Clone)]
pub struct ArrowDrawer {
    markers: BTreeMap<String, (ArrowHead, Color)>,
}

impl ArrowDrawer {
    /// Creates an empty drawer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the marker an arrow refers to.
    pub fn register(&mut self, arrow: &Arrow) {
        let color = arrow.definition.stroke().color();
        let head = arrow.definition.head();
        if let Some(id) = Arrow::marker_id(head, color) {
            self.markers.entry(id).or_insert((head, color));
        }
    }

    /// Returns the number of distinct markers.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Generates the SVG marker definitions for every registered marker.
    pub fn draw_marker_definitions(&self) -> svg_element::Definitions {
        self.markers
            .iter()
            .fold(svg_element::Definitions::new(), |defs, (id, (head, color))| {
                defs.add(Self::create_marker(id, *head, *color))
            })
    }

    fn create_marker(id: &str, head: ArrowHead, color: Color) -> svg_element::Marker {
        let marker = svg_element::Marker::new()
            .set("id", id)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto");

        let head_path = match head {
            ArrowHead::Filled => svg_element::Path::new()
                .set("d", "M 0 0 L 10 5 L 0 10 z")
                .set("fill", color.to_hex())
                .set("fill-opacity", color.alpha()),
            ArrowHead::Open | ArrowHead::None => svg_element::Path::new()
                .set("d", "M 1 1 L 9 5 L 1 9")
                .set("fill", "none")
                .set("stroke", color.to_hex())
                .set("stroke-opacity", color.alpha())
                .set("stroke-width", 1.5)
                .set("stroke-linejoin", "miter"),
        };

        marker.add(head_path)
    }
}
