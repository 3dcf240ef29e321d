//! TECM Figures - static architecture diagrams for the TECM career-evolution model.
//!
//! A small imperative drawing layer ([`Canvas`]) with boxes, arrows, section
//! titles, free text, panels and legend swatches, exported to SVG and PNG,
//! plus the two figures drawn with it.
//!
//! # Examples
//!
//! Drawing and exporting a canvas directly:
//!
//! ```rust,no_run
//! use tecm_figures::{ArrowStyle, BoxStyle, Canvas, OutputFormat};
//! use tecm_figures::geometry::Point;
//!
//! let mut canvas = Canvas::new(20.0, 28.0)?;
//! canvas.draw_box(1.0, 1.0, 4.0, 1.0, "Test", &BoxStyle::default())?;
//! canvas.draw_arrow(Point::new(3.0, 1.0), Point::new(3.0, 5.0), &ArrowStyle::default())?;
//! canvas.export("test.svg", OutputFormat::Svg, 300)?;
//! canvas.export("test.png", OutputFormat::Png, 300)?;
//! # Ok::<(), tecm_figures::FigureError>(())
//! ```
//!
//! Generating both figures with the default configuration:
//!
//! ```rust,no_run
//! use tecm_figures::{config::AppConfig, generate_all};
//!
//! for figure in generate_all(&AppConfig::default())? {
//!     println!("{}: {:?}", figure.kind(), figure.paths());
//! }
//! # Ok::<(), tecm_figures::FigureError>(())
//! ```

pub mod config;
pub mod export;
pub mod figures;

mod canvas;
mod error;

pub use tecm_figures_core::{color, draw, geometry};

pub use canvas::{ArrowStyle, BoxHandle, BoxStyle, Canvas, PanelStyle, TextStyle};
pub use error::FigureError;
pub use export::{ExportError, OutputFormat};
pub use figures::{FigureKind, GeneratedFigure, generate_all};
