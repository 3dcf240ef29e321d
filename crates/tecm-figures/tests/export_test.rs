//! Integration tests for SVG and PNG export.

use std::fs;

use tempfile::tempdir;

use tecm_figures::{
    ArrowStyle, BoxStyle, Canvas, ExportError, FigureError, OutputFormat, geometry::Point,
};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn test_canvas() -> Canvas {
    let mut canvas = Canvas::new(20.0, 28.0).expect("Failed to create canvas");
    canvas
        .draw_box(1.0, 1.0, 4.0, 1.0, "Test", &BoxStyle::default())
        .expect("Failed to draw box");
    canvas
        .draw_arrow(
            Point::new(3.0, 1.0),
            Point::new(3.0, 5.0),
            &ArrowStyle::default(),
        )
        .expect("Failed to draw arrow");
    canvas
}

#[test]
fn test_end_to_end_svg_and_png() {
    let dir = tempdir().expect("Failed to create temp directory");
    let svg_path = dir.path().join("test.svg");
    let png_path = dir.path().join("test.png");

    let mut canvas = test_canvas();
    canvas.export(&svg_path, OutputFormat::Svg, 300).unwrap();
    canvas.export(&png_path, OutputFormat::Png, 300).unwrap();

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(!svg.is_empty());
    assert!(svg.contains("Test"));
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
    assert!(tree.is_ok(), "SVG should parse: {:?}", tree.err());

    let png = fs::read(&png_path).unwrap();
    assert!(png.starts_with(PNG_SIGNATURE));
}

#[test]
fn test_png_size_follows_dpi() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("scaled.png");

    let mut canvas = Canvas::new(2.0, 1.0).unwrap();
    canvas.export(&path, OutputFormat::Png, 36).unwrap();

    // (2 + 0.2) x (1 + 0.2) units at half a pixel per point.
    let png = fs::read(&path).unwrap();
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    assert_eq!((width, height), (80, 44));
}

#[test]
fn test_svg_and_png_are_independent_files() {
    let dir = tempdir().expect("Failed to create temp directory");
    let svg_path = dir.path().join("figure.svg");
    let png_path = dir.path().join("figure.png");

    let mut canvas = test_canvas();
    canvas.export(&svg_path, OutputFormat::Svg, 150).unwrap();
    canvas.export(&png_path, OutputFormat::Png, 150).unwrap();

    // Removing one leaves the other intact.
    fs::remove_file(&svg_path).unwrap();
    assert!(fs::read(&png_path).unwrap().starts_with(PNG_SIGNATURE));

    // Same primitive set: re-exporting the vector form gives the same document.
    canvas.export(&svg_path, OutputFormat::Svg, 150).unwrap();
    assert_eq!(fs::read_to_string(&svg_path).unwrap(), canvas.render_svg());
}

#[test]
fn test_unwritable_path_fails_and_leaves_no_file() {
    let dir = tempdir().expect("Failed to create temp directory");
    let blocker = dir.path().join("not-a-directory");
    fs::write(&blocker, "file").unwrap();

    for format in [OutputFormat::Svg, OutputFormat::Png] {
        let path = blocker.join(format!("figure.{format}"));
        let result = test_canvas().export(&path, format, 72);

        assert!(
            matches!(result, Err(FigureError::OutputWrite(ExportError::Io { .. }))),
            "unexpected result: {result:?}"
        );
        assert!(!path.exists());
    }
}

#[test]
fn test_export_overwrites_previous_output() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("figure.svg");
    fs::write(&path, "stale").unwrap();

    test_canvas().export(&path, OutputFormat::Svg, 300).unwrap();

    assert!(fs::read_to_string(&path).unwrap().starts_with("<svg"));
}

#[test]
fn test_zero_dpi_is_rejected() {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("figure.png");

    let result = test_canvas().export(&path, OutputFormat::Png, 0);

    assert!(matches!(result, Err(FigureError::InvalidArgument(_))));
    assert!(!path.exists());
}
