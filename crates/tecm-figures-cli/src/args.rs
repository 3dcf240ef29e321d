//! Command-line argument definitions for the figure generator.

use std::path::PathBuf;

use clap::Parser;

/// Generates the TECM architecture figures
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the figures are written to, overriding the configuration
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
