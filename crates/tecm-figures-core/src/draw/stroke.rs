//! Stroke and line-style definitions.
//!
//! This module provides the stroke definition shared by every primitive that
//! draws an outline or a line: box borders, panel borders, arrows and legend
//! line swatches.
//!
//! # Overview
//!
//! Exported types:
//! - [`StrokeDefinition`]: color, width (points) and style of a stroke
//! - [`StrokeStyle`]: line pattern (solid, dashed, dotted, dash-dot, custom)
//! - [`apply_stroke!`](crate::apply_stroke!): macro applying a stroke to an SVG element
//!
//! # Dash Patterns
//!
//! Dash patterns are expressed in multiples of the stroke width, so a dashed
//! 2pt line has proportionally longer dashes than a dashed 1pt line:
//!
//! | Style      | Pattern (× width)      |
//! |------------|------------------------|
//! | `Solid`    | none                   |
//! | `Dashed`   | `3.7, 1.6`             |
//! | `Dotted`   | `1, 1.65`              |
//! | `DashDot`  | `6.4, 1.6, 1, 1.6`     |
//! | `Custom`   | the given lengths      |
//!
//! ```
//! use tecm_figures_core::color::Color;
//! use tecm_figures_core::draw::{StrokeDefinition, StrokeStyle};
//!
//! let stroke = StrokeDefinition::dashed(Color::new("#D32F2F").unwrap(), 2.0);
//! assert_eq!(stroke.dasharray().as_deref(), Some("7.4,3.2"));
//! assert_eq!(*stroke.style(), StrokeStyle::Dashed);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Alternating dash and dot
    DashDot,
    /// Custom on/off lengths, in multiples of the stroke width
    Custom(Vec<f32>),
}

impl FromStr for StrokeStyle {
    type Err = String;

    /// Parses both the long names and the short plotting notation
    /// (`-`, `--`, `:`, `-.`). A comma-separated list of numbers is a
    /// custom pattern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "solid" | "-" => Ok(Self::Solid),
            "dashed" | "--" => Ok(Self::Dashed),
            "dotted" | ":" => Ok(Self::Dotted),
            "dashdot" | "dash-dot" | "-." => Ok(Self::DashDot),
            other => {
                let lengths = other
                    .split(',')
                    .map(|part| part.trim().parse::<f32>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| format!("invalid stroke style `{s}`"))?;
                if lengths.is_empty() || lengths.iter().any(|len| !len.is_finite() || *len < 0.0) {
                    return Err(format!("invalid stroke style `{s}`"));
                }
                Ok(Self::Custom(lengths))
            }
        }
    }
}

impl StrokeStyle {
    /// Returns the on/off pattern in multiples of the stroke width, or `None`
    /// for solid lines.
    pub fn pattern(&self) -> Option<Vec<f32>> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(vec![3.7, 1.6]),
            Self::Dotted => Some(vec![1.0, 1.65]),
            Self::DashDot => Some(vec![6.4, 1.6, 1.0, 1.6]),
            Self::Custom(lengths) => Some(lengths.clone()),
        }
    }
}

/// A stroke definition for borders and lines.
///
/// The width is in points. A width of zero disables the stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Returns the stroke with a different style.
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the stroke with its color alpha replaced.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color = self.color.with_alpha(alpha);
        self
    }

    /// Returns the SVG `stroke-dasharray` value, scaled by the stroke width.
    pub fn dasharray(&self) -> Option<String> {
        let pattern = self.style.pattern()?;
        let scale = self.width.max(1.0);
        Some(
            pattern
                .iter()
                .map(|len| format!("{}", (len * scale * 100.0).round() / 100.0))
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width and (for patterned styles) the
/// dash array. A zero-width stroke becomes `stroke="none"`.
///
/// # Examples
///
/// ```
/// use tecm_figures_core::color::Color;
/// use tecm_figures_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("#424242").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new().set("width", 100).set("height", 50);
/// let rect = tecm_figures_core::apply_stroke!(rect, &stroke);
/// assert!(rect.to_string().contains("stroke-width=\"2\""));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        if stroke.width() <= 0.0 {
            $element.set("stroke", "none")
        } else {
            let mut elem = $element
                .set("stroke", stroke.color().to_hex())
                .set("stroke-opacity", stroke.color().alpha())
                .set("stroke-width", stroke.width());

            if let Some(dasharray) = stroke.dasharray() {
                elem = elem.set("stroke-dasharray", dasharray);
            }

            elem
        }
    }};
}
