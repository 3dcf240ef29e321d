//! CLI logic for the TECM figure generator.

mod args;
mod config;

pub use args::Args;

use log::info;

use tecm_figures::{FigureError, GeneratedFigure, generate_all};

/// Loads the configuration, applies command-line overrides and writes every
/// figure.
///
/// Prints one line per figure naming the files written.
///
/// # Errors
///
/// Returns [`FigureError`] if the configuration cannot be loaded or any
/// figure cannot be written.
pub fn run(args: &Args) -> Result<Vec<GeneratedFigure>, FigureError> {
    let mut app_config = config::load_config(args.config.as_deref())?;
    if let Some(dir) = &args.output_dir {
        app_config = app_config.with_output_dir(dir);
    }

    info!(output_dir:? = app_config.output().directory(); "Generating figures");

    let figures = generate_all(&app_config)?;
    for figure in &figures {
        let files = figure
            .paths()
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("Generated {}: {files}", figure.kind());
    }

    Ok(figures)
}
