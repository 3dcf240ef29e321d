//! Export of a finished canvas to files.
//!
//! Two encodings are supported:
//!
//! - [`svg`]: the vector document, produced directly from the drawables
//! - [`png`]: a raster rendering of that same document via `resvg`
//!
//! # Atomic Writes
//!
//! Every file is written through [`write_atomic`]: the bytes go to a
//! temporary file in the destination directory, which is then renamed over
//! the target. A failed export therefore never leaves a truncated file
//! behind; either a complete file exists at the path or nothing does.
//!
//! # Error Handling
//!
//! Export operations return [`ExportError`], which converts into
//! [`FigureError::OutputWrite`] at the crate boundary.
//!
//! [`FigureError::OutputWrite`]: crate::FigureError::OutputWrite

pub mod png;
pub mod svg;

use std::{
    fmt, io,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};
#[cfg(unix)]
use std::{fs::Permissions, os::unix::fs::PermissionsExt};

use log::{debug, error};
use tempfile::Builder;
use thiserror::Error;

/// Mode of written figures before the process umask applies.
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o644;

/// Errors that can occur while encoding or writing a figure.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An I/O error encountered while writing `path`.
    #[error("cannot write `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The requested output format is not supported.
    #[error("unsupported output format `{0}`, supported formats: svg, png")]
    UnsupportedFormat(String),

    /// The vector document could not be rasterized.
    #[error("rasterization failed: {0}")]
    Raster(String),
}

/// Output encoding of an exported figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Scalable vector graphics
    Svg,
    /// Portable network graphics
    Png,
}

impl OutputFormat {
    /// Returns the file extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    /// Infers the format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnsupportedFormat`] if the path has no
    /// extension or an unknown one.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ExportError::UnsupportedFormat(path.display().to_string()))?
            .parse()
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Writes `bytes` to `path` through a temporary file in the same directory.
///
/// The destination directory must already exist.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the temporary file cannot be created or
/// written, or if it cannot be renamed over `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_error = |source: io::Error| {
        error!(path:? = path, err:% = source; "Failed to write output file");
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Temporary files are owner-only; exported figures get the usual mode.
    let mut builder = Builder::new();
    #[cfg(unix)]
    builder.permissions(Permissions::from_mode(OUTPUT_FILE_MODE));

    let mut temp_file = builder.tempfile_in(directory).map_err(io_error)?;
    temp_file.write_all(bytes).map_err(io_error)?;
    temp_file.as_file().sync_all().map_err(io_error)?;
    temp_file.persist(path).map_err(|err| io_error(err.error))?;

    debug!(path:? = path, bytes = bytes.len(); "Output file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("svg".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("PNG".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("figures/fig00.png")).unwrap(),
            OutputFormat::Png
        );
        assert!(OutputFormat::from_path(Path::new("figures/fig00")).is_err());
    }

    #[test]
    fn test_write_atomic_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.svg");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_uses_regular_file_mode() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.svg");
        let exported = dir.path().join("out.svg");
        fs::write(&plain, "<svg/>").unwrap();

        write_atomic(&exported, b"<svg/>").unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&exported), OUTPUT_FILE_MODE & mode(&plain));
        assert_ne!(mode(&exported) & 0o044, 0);
    }

    #[test]
    fn test_write_atomic_missing_directory_leaves_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");

        let result = write_atomic(&path, b"<svg/>");

        assert!(matches!(result, Err(ExportError::Io { .. })));
        assert!(!path.exists());
    }
}
