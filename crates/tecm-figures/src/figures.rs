//! The two TECM architecture figures and their batch generation.
//!
//! Each figure lives in its own module with its layout expressed as named
//! constants; [`generate_all`] draws both and exports every configured
//! format into the output directory.

pub mod detailed;
pub mod overview;
pub mod palette;

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    canvas::Canvas,
    config::AppConfig,
    error::FigureError,
    export::{ExportError, OutputFormat},
};

/// The figures this crate knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    /// The full "Detailed Model Architecture" poster
    Detailed,
    /// The condensed "Framework Overview"
    Overview,
}

impl FigureKind {
    /// Every figure, in generation order.
    pub const ALL: [FigureKind; 2] = [FigureKind::Detailed, FigureKind::Overview];

    /// Returns the output file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Detailed => "fig00_detailed_architecture",
            Self::Overview => "fig01_architecture_v2",
        }
    }

    /// Returns the canvas width and height in units.
    pub fn canvas_size(self) -> (f32, f32) {
        match self {
            Self::Detailed => (detailed::WIDTH, detailed::HEIGHT),
            Self::Overview => (overview::WIDTH, overview::HEIGHT),
        }
    }

    /// Draws this figure onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by a primitive call.
    pub fn draw(self, canvas: &mut Canvas) -> Result<(), FigureError> {
        match self {
            Self::Detailed => detailed::draw(canvas),
            Self::Overview => overview::draw(canvas),
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detailed => f.write_str("detailed architecture"),
            Self::Overview => f.write_str("framework overview"),
        }
    }
}

/// The files written for one figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFigure {
    kind: FigureKind,
    paths: Vec<PathBuf>,
}

impl GeneratedFigure {
    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    /// Returns the written files, one per configured format.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Draws every figure and exports it in each configured format.
///
/// The output directory is created if needed. Figures are written one after
/// the other; the first failure aborts the run.
///
/// # Errors
///
/// Returns [`FigureError::Config`] for an invalid configuration and
/// [`FigureError::OutputWrite`] if a file cannot be written.
pub fn generate_all(config: &AppConfig) -> Result<Vec<GeneratedFigure>, FigureError> {
    let output = config.output();
    let formats = output.formats()?;
    let background = config.style().background_color()?;
    let directory = output.directory();

    create_output_dir(directory)?;

    FigureKind::ALL
        .iter()
        .map(|&kind| {
            info!(figure:% = kind, directory:? = directory; "Generating figure");
            let (width, height) = kind.canvas_size();
            let mut canvas = Canvas::new(width, height)?
                .with_font_family(config.style().font_family())
                .with_background(background);
            kind.draw(&mut canvas)?;

            let paths = formats
                .iter()
                .map(|&format| {
                    let path = output_path(directory, kind, format);
                    canvas.export(&path, format, output.dpi())?;
                    Ok(path)
                })
                .collect::<Result<Vec<_>, FigureError>>()?;

            Ok(GeneratedFigure { kind, paths })
        })
        .collect()
}

fn output_path(directory: &Path, kind: FigureKind, format: OutputFormat) -> PathBuf {
    directory.join(format!("{}.{}", kind.file_stem(), format.extension()))
}

fn create_output_dir(directory: &Path) -> Result<(), FigureError> {
    fs::create_dir_all(directory).map_err(|source| {
        FigureError::OutputWrite(ExportError::Io {
            path: directory.to_path_buf(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stems() {
        assert_eq!(FigureKind::Detailed.file_stem(), "fig00_detailed_architecture");
        assert_eq!(FigureKind::Overview.file_stem(), "fig01_architecture_v2");
    }

    #[test]
    fn test_output_path() {
        let path = output_path(Path::new("figures"), FigureKind::Overview, OutputFormat::Png);
        assert_eq!(path, PathBuf::from("figures/fig01_architecture_v2.png"));
    }

    #[test]
    fn test_canvas_sizes() {
        assert_eq!(FigureKind::Detailed.canvas_size(), (20.0, 28.0));
        assert_eq!(FigureKind::Overview.canvas_size(), (16.0, 12.0));
    }
}
