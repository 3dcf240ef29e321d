//! Error types for figure generation.
//!
//! This module provides the main error type [`FigureError`] which covers the
//! failures a drawing or export call can report.

use miette::Diagnostic;
use thiserror::Error;

use crate::export::ExportError;

/// The main error type for figure generation.
///
/// None of these are retried: invalid arguments are programming errors in the
/// figure definition, and a failed write is surfaced directly to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum FigureError {
    /// A size, font size, alpha, line width or color was rejected.
    #[error("Invalid argument: {0}")]
    #[diagnostic(code(tecm_figures::invalid_argument))]
    InvalidArgument(String),

    /// A primitive was drawn after the canvas was exported.
    #[error("Canvas is sealed: drawing is not allowed after export")]
    #[diagnostic(
        code(tecm_figures::sealed),
        help("build a new canvas for each figure")
    )]
    Sealed,

    /// The output could not be written.
    #[error("Failed to write output: {0}")]
    #[diagnostic(code(tecm_figures::output_write))]
    OutputWrite(#[from] ExportError),

    /// A configuration value was rejected.
    #[error("Configuration error: {0}")]
    #[diagnostic(code(tecm_figures::config))]
    Config(String),
}

impl FigureError {
    /// Creates an [`InvalidArgument`](Self::InvalidArgument) error.
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
