//! Integration tests for the Canvas drawing contract.

use proptest::prelude::*;

use tecm_figures::{
    ArrowStyle, BoxStyle, Canvas, FigureError, OutputFormat, PanelStyle, TextStyle,
    draw::{ArrowHead, Curvature, StrokeStyle},
    geometry::Point,
};

fn canvas() -> Canvas {
    Canvas::new(20.0, 28.0).expect("Failed to create canvas")
}

proptest! {
    #[test]
    fn draw_box_appends_exactly_one_primitive(
        x in -50.0f32..50.0,
        y in -50.0f32..50.0,
        w in 0.001f32..100.0,
        h in 0.001f32..100.0,
    ) {
        let mut canvas = canvas();
        canvas.draw_box(0.0, 0.0, 1.0, 1.0, "first", &BoxStyle::default()).unwrap();
        let before = canvas.primitive_count();

        let handle = canvas.draw_box(x, y, w, h, "Box", &BoxStyle::default());

        prop_assert!(handle.is_ok());
        prop_assert_eq!(canvas.primitive_count(), before + 1);
    }

    #[test]
    fn draw_arrow_accepts_any_finite_points(
        x1 in -50.0f32..50.0,
        y1 in -50.0f32..50.0,
        x2 in -50.0f32..50.0,
        y2 in -50.0f32..50.0,
        rad in -1.0f32..1.0,
    ) {
        let mut canvas = canvas();
        let style = ArrowStyle::default().with_curvature(Curvature::new(rad));

        prop_assert!(canvas.draw_arrow(Point::new(x1, y1), Point::new(x2, y2), &style).is_ok());
        prop_assert!(canvas.draw_arrow(Point::new(x1, y1), Point::new(x1, y1), &style).is_ok());
        prop_assert_eq!(canvas.primitive_count(), 2);
    }
}

#[test]
fn test_invalid_arguments_leave_count_unchanged() {
    let mut canvas = canvas();
    canvas
        .draw_box(1.0, 1.0, 4.0, 1.0, "Test", &BoxStyle::default())
        .unwrap();

    let cases = [
        canvas.draw_box(1.0, 1.0, 0.0, 1.0, "zero width", &BoxStyle::default()),
        canvas.draw_box(1.0, 1.0, 1.0, -1.0, "negative height", &BoxStyle::default()),
        canvas.draw_box(
            1.0,
            1.0,
            1.0,
            1.0,
            "no font",
            &BoxStyle::default().with_font_size(0.0),
        ),
        canvas.draw_box(
            1.0,
            1.0,
            1.0,
            1.0,
            "bad color",
            &BoxStyle::new("not-a-color", "#333333"),
        ),
    ];
    for result in cases {
        assert!(matches!(result, Err(FigureError::InvalidArgument(_))));
    }

    assert!(matches!(
        canvas.draw_arrow(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &ArrowStyle::default().with_color("#12345")
        ),
        Err(FigureError::InvalidArgument(_))
    ));
    assert!(matches!(
        canvas.draw_section_title(10.0, 26.0, "Title", "#1976D2", 0.0),
        Err(FigureError::InvalidArgument(_))
    ));
    assert!(matches!(
        canvas.draw_text(
            f32::NAN,
            1.0,
            "nowhere",
            &TextStyle::default()
        ),
        Err(FigureError::InvalidArgument(_))
    ));
    assert!(matches!(
        canvas.draw_panel(0.0, 0.0, 1.0, 1.0, &PanelStyle::default().with_alpha(-0.1)),
        Err(FigureError::InvalidArgument(_))
    ));

    assert_eq!(canvas.primitive_count(), 1);
}

#[test]
fn test_drawing_after_export_is_sealed() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut canvas = canvas();
    canvas
        .draw_box(1.0, 1.0, 4.0, 1.0, "Test", &BoxStyle::default())
        .unwrap();
    assert!(!canvas.is_sealed());

    canvas
        .export(dir.path().join("sealed.svg"), OutputFormat::Svg, 72)
        .unwrap();

    assert!(canvas.is_sealed());
    assert!(matches!(
        canvas.draw_box(1.0, 1.0, 4.0, 1.0, "late", &BoxStyle::default()),
        Err(FigureError::Sealed)
    ));
    assert!(matches!(
        canvas.draw_section_title(10.0, 26.0, "late", "#1976D2", 12.0),
        Err(FigureError::Sealed)
    ));
    assert_eq!(canvas.primitive_count(), 1);

    // Other formats may still be exported.
    canvas
        .export(dir.path().join("sealed.png"), OutputFormat::Png, 72)
        .unwrap();
}

#[test]
fn test_failed_export_does_not_seal() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut canvas = canvas();

    let result = canvas.export(
        dir.path().join("missing").join("figure.svg"),
        OutputFormat::Svg,
        72,
    );

    assert!(matches!(result, Err(FigureError::OutputWrite(_))));
    assert!(!canvas.is_sealed());
    canvas
        .draw_box(1.0, 1.0, 4.0, 1.0, "still open", &BoxStyle::default())
        .unwrap();
}

#[test]
fn test_layers_keep_arrows_above_boxes() {
    let mut canvas = canvas();
    canvas
        .draw_arrow(
            Point::new(3.0, 1.0),
            Point::new(3.0, 5.0),
            &ArrowStyle::default()
                .with_head(ArrowHead::Filled)
                .with_line_style(StrokeStyle::Dotted),
        )
        .unwrap();
    canvas
        .draw_box(1.0, 1.0, 4.0, 1.0, "drawn later", &BoxStyle::default())
        .unwrap();
    let svg = canvas.render_svg();

    let patch = svg.find("data-layer=\"patch\"").unwrap();
    let annotation = svg.find("data-layer=\"annotation\"").unwrap();
    assert!(patch < annotation);
}
