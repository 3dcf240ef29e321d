//! Color handling for figure primitives.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are written to SVG as `#rrggbb` plus a separate
//! opacity, which every SVG consumer (browsers, `usvg`) understands.

use std::str::FromStr;

use color::{DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#E8F4FD"`,
    /// `"rgb(255, 0, 0)"` or `"white"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecm_figures_core::color::Color;
    ///
    /// let light_blue = Color::new("#E8F4FD").unwrap();
    /// let white = Color::new("white").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the opaque `#rrggbb` form of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecm_figures_core::color::Color;
    ///
    /// let color = Color::new("#1976D2").unwrap();
    /// assert_eq!(color.to_hex(), "#1976d2");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Returns an ID-safe string for use in SVG `id` attributes, such as
    /// marker definitions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tecm_figures_core::color::Color;
    ///
    /// let color = Color::new("#ff8000").unwrap();
    /// let id_str = color.to_id_safe_string();
    /// assert!(id_str.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        self.to_hex().replace('#', "hex")
    }

    /// Creates a new color with the specified alpha value (0.0 to 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// use tecm_figures_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let faded = red.with_alpha(0.5);
    /// assert_eq!(faded.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_hex(), "#000000");
    }

    #[test]
    fn test_color_to_hex_named_and_hex() {
        assert_eq!(Color::new("white").unwrap().to_hex(), "#ffffff");
        assert_eq!(Color::new("#E8F4FD").unwrap().to_hex(), "#e8f4fd");
        assert_eq!(Color::new("#333333").unwrap().to_string(), "#333333");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        assert!((color.alpha() - 1.0).abs() < 0.001);

        let transparent = color.with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
        assert_eq!(transparent.to_hex(), "#ff0000");
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let safe_id = Color::new("#D32F2F").unwrap().to_id_safe_string();
        assert_eq!(safe_id, "hexd32f2f");
    }

    #[test]
    fn test_color_from_str() {
        let color: Color = "#2E7D32".parse().unwrap();
        assert_eq!(color.to_hex(), "#2e7d32");
    }
}
