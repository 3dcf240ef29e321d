//! Configuration types for figure generation.
//!
//! All types implement [`serde::Deserialize`] so the command-line front end
//! can load them from TOML. Every field has a default, so an empty file (or
//! no file at all) yields a usable configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining output and style settings.
//! - [`OutputConfig`] - Where figures are written, at which resolution and in which formats.
//! - [`StyleConfig`] - Font family and background color shared by every figure.
//!
//! # Example
//!
//! ```
//! # use tecm_figures::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.output().dpi(), 300);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use tecm_figures_core::color::Color;

use crate::{error::FigureError, export::OutputFormat};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(output: OutputConfig, style: StyleConfig) -> Self {
        Self { output, style }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a copy writing into `directory` instead of the configured one.
    pub fn with_output_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = directory.into();
        self
    }
}

/// Output location, resolution and formats.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    directory: PathBuf,
    dpi: u32,
    formats: Vec<String>,
}

impl OutputConfig {
    /// Creates an output configuration.
    pub fn new(directory: impl Into<PathBuf>, dpi: u32, formats: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            dpi,
            formats,
        }
    }

    /// Returns the output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the raster resolution in dots per inch.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns the parsed output formats, in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::Config`] if a format is unknown, the list is
    /// empty, or the resolution is zero.
    pub fn formats(&self) -> Result<Vec<OutputFormat>, FigureError> {
        if self.dpi == 0 {
            return Err(FigureError::Config("output.dpi must be positive".to_string()));
        }
        if self.formats.is_empty() {
            return Err(FigureError::Config(
                "output.formats must name at least one format".to_string(),
            ));
        }
        self.formats
            .iter()
            .map(|format| {
                format
                    .parse::<OutputFormat>()
                    .map_err(|err| FigureError::Config(format!("output.formats: {err}")))
            })
            .collect()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("figures"),
            dpi: 300,
            formats: vec!["svg".to_string(), "png".to_string()],
        }
    }
}

/// Visual styling shared by every figure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_family: String,
    background_color: String,
}

impl StyleConfig {
    /// Creates a style configuration.
    pub fn new(font_family: impl Into<String>, background_color: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
            background_color: background_color.into(),
        }
    }

    /// Returns the font family used for every label.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, FigureError> {
        Color::new(&self.background_color)
            .map_err(|err| FigureError::Config(format!("Invalid background color in config: {err}")))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "DejaVu Sans".to_string(),
            background_color: "white".to_string(),
        }
    }
}
