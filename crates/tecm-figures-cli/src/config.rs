//! Configuration file discovery.
//!
//! The first file found wins: an explicit `--config` path, then
//! `tecm-figures/config.toml` in the working directory, then the platform
//! configuration directory. Without any file the defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tecm_figures::{FigureError, config::AppConfig};

const LOCAL_CONFIG: &str = "tecm-figures/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConfigError> for FigureError {
    fn from(err: ConfigError) -> Self {
        FigureError::Config(err.to_string())
    }
}

/// Finds and loads the configuration.
///
/// # Errors
///
/// Returns [`FigureError::Config`] if an explicit path does not exist or if
/// the selected file cannot be read or parsed.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig, FigureError> {
    if let Some(path) = explicit_path {
        info!(path:? = path; "Loading configuration from explicit path");
        return Ok(load_config_file(path)?);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path:? = local_config; "Loading configuration from local path");
        return Ok(load_config_file(local_config)?);
    }

    match ProjectDirs::from("com", "tecm", "tecm-figures") {
        Some(dirs) => {
            let system_config = dirs.config_dir().join("config.toml");
            if system_config.exists() {
                info!(path:? = system_config; "Loading configuration from system path");
                return Ok(load_config_file(&system_config)?);
            }
            debug!(path:? = system_config; "System configuration file not found");
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndpi = 150\nformats = [\"svg\"]").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.output().dpi(), 150);
        assert_eq!(config.style().font_family(), "DejaVu Sans");
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config(Some(Path::new("/nonexistent/tecm.toml"))).unwrap_err();
        assert!(matches!(err, FigureError::Config(_)));
        assert!(err.to_string().contains("missing configuration file"));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output\ndpi = ").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, FigureError::Config(_)));
    }
}
