//! Raster export through `resvg`.
//!
//! The SVG document is parsed with `usvg`, rendered into a `tiny-skia`
//! pixmap scaled by `dpi / 72` and encoded as PNG. Text is shaped with the
//! system fonts, loaded into a fresh `fontdb` database for each call.

use std::sync::Arc;

use log::debug;

use super::ExportError;

/// SVG user units per inch.
const POINTS_PER_INCH: f32 = 72.0;

/// Rasterizes an SVG document at `dpi` and returns the PNG bytes.
///
/// `font_family` is used for text that does not name an installed family.
///
/// # Errors
///
/// Returns [`ExportError::Raster`] if the document cannot be parsed, the
/// pixmap cannot be allocated or the PNG cannot be encoded.
pub fn rasterize(svg: &str, dpi: u32, font_family: &str) -> Result<Vec<u8>, ExportError> {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    debug!(faces = fontdb.len(); "Loaded system fonts");

    let options = usvg::Options {
        font_family: font_family.to_string(),
        fontdb: Arc::new(fontdb),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| ExportError::Raster(format!("cannot parse SVG document: {err}")))?;

    let scale = dpi as f32 / POINTS_PER_INCH;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        ExportError::Raster(format!("cannot allocate a {width}x{height} pixmap"))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    debug!(width, height, dpi; "Figure rasterized");

    pixmap
        .encode_png()
        .map_err(|err| ExportError::Raster(format!("cannot encode PNG: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn test_rasterize_scales_by_dpi() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="72" height="36" viewBox="0 0 72 36"><rect width="72" height="36" fill="#ffffff"/></svg>"##;

        let png = rasterize(svg, 144, "DejaVu Sans").unwrap();

        assert!(png.starts_with(PNG_SIGNATURE));
        // IHDR width and height follow the signature and chunk header.
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 144);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 72);
    }

    #[test]
    fn test_rasterize_rejects_malformed_document() {
        let result = rasterize("<svg", 72, "DejaVu Sans");
        assert!(matches!(result, Err(ExportError::Raster(_))));
    }
}
