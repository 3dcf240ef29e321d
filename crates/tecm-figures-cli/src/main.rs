//! TECM figure generator entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use tecm_figures_cli::Args;

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting TECM figure generation");
    debug!(args:?; "Parsed arguments");

    match tecm_figures_cli::run(&args) {
        Ok(figures) => info!(count = figures.len(); "Completed successfully"),
        Err(err) => {
            let mut writer = String::new();
            if miette::GraphicalReportHandler::new()
                .render_report(&mut writer, &err)
                .is_err()
            {
                writer = err.to_string();
            }
            error!("{writer}");
            process::exit(1);
        }
    }
}
