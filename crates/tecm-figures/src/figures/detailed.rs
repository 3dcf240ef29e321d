//! "Detailed Model Architecture" figure.
//!
//! A 20 × 28 unit poster of the full TECM pipeline, read bottom to top in the
//! model but laid out top to bottom on the page: data sources, Model I task
//! decomposition, Model II congestion dynamics around the shared state
//! variables, Model III multi-channel learning, the key feedback loops and
//! the decision outputs. A legend strip sits below the canvas origin.

use tecm_figures_core::{
    color::Color,
    draw::{ArrowHead, Curvature, LegendEntry, StrokeDefinition, StrokeStyle, TextAnchor},
    geometry::Point,
};

use super::palette;
use crate::{
    canvas::{ArrowStyle, BoxStyle, Canvas, PanelStyle, TextStyle},
    error::FigureError,
};

pub const WIDTH: f32 = 20.0;
pub const HEIGHT: f32 = 28.0;

const CENTER_X: f32 = 10.0;

// Row baselines, top of the page first.
const TITLE_Y: f32 = 27.3;
const SUBTITLE_Y: f32 = 26.8;
const DATA_TITLE_Y: f32 = 26.0;
const DATA_Y: f32 = 24.5;
const M1_TITLE_Y: f32 = 23.2;
const M1_Y: f32 = 21.2;
const M2_TITLE_Y: f32 = 19.8;
const STATE_Y: f32 = 17.5;
const DYN_Y: f32 = 14.5;
const M3_TITLE_Y: f32 = 10.8;
const M3_Y: f32 = 8.2;
const FEEDBACK_TITLE_Y: f32 = 5.2;
const FEEDBACK_Y: f32 = 3.5;
const OUTPUT_TITLE_Y: f32 = 2.2;
const OUTPUT_Y: f32 = 0.5;
const LEGEND_Y: f32 = -0.35;

const DATA_BOX_WIDTH: f32 = 2.8;
const M1_BOX_HEIGHT: f32 = 1.5;
const STATE_BOX_WIDTH: f32 = 3.0;
const STATE_BOX_HEIGHT: f32 = 1.2;
const DYN_BOX_HEIGHT: f32 = 2.5;
const M3_BOX_HEIGHT: f32 = 2.2;
const OUTPUT_BOX_WIDTH: f32 = 3.2;

const DATA_SOURCES: [(f32, &str); 5] = [
    (1.5, "O*NET 28.3\n(Task Database)"),
    (5.0, "BLS OEWS\n(Employment)"),
    (8.5, "IPEDS\n(Graduates)"),
    (12.0, "GPTs/AIOE\n(AI Exposure)"),
    (15.5, "Industry Surveys\n(Adoption Rates)"),
];

/// x, label, fill, border
const STATE_VARIABLES: [(f32, &str, &str, &str); 5] = [
    (1.0, "A(t)\nAdoption", "#E3F2FD", "#1565C0"),
    (4.8, "E(t)\nEmployment", "#E8F5E9", "#2E7D32"),
    (8.6, "Vₛ(t)\nCapability", "#F3E5F5", "#7B1FA2"),
    (12.4, "ρ(t)\nCongestion", "#FFF3E0", "#EF6C00"),
    (16.2, "D(t)\nDemand", "#FFEBEE", "#C62828"),
];

const FEEDBACK_LOOPS: [(f32, &str, &str); 4] = [
    (
        0.5,
        "VBC Feedback\nA↑ → ρ↑ → dA/dt↓\n(Congestion slows adoption)",
        "#FFCDD2",
    ),
    (
        5.2,
        "Demand Rebound\nA↑ → C↓ → D↑ → E↑\n(Jevons Paradox)",
        "#C8E6C9",
    ),
    (
        10.0,
        "Educational Loop\nφ↑ → Vₛ↑ → s↓ → A*↑\n(Extends augmentation)",
        "#E1BEE7",
    ),
    (
        14.8,
        "Learning Loop\nA↑ → L_job↑ → Vₛ↑\n(Skill accumulation)",
        "#B3E5FC",
    ),
];

const DECISION_OUTPUTS: [(f32, &str); 5] = [
    (0.5, "Enrollment\nStrategy"),
    (4.2, "Curriculum\nRedesign (φ)"),
    (7.9, "Tipping Point\nMonitoring"),
    (11.6, "Supply-Demand\nProjection"),
    (15.3, "Risk\nAssessment"),
];

/// Draws the whole figure onto a 20 × 28 canvas.
pub fn draw(canvas: &mut Canvas) -> Result<(), FigureError> {
    draw_header(canvas)?;
    draw_data_sources(canvas)?;
    draw_model_one(canvas)?;
    draw_model_two(canvas)?;
    draw_model_three(canvas)?;
    draw_feedback_loops(canvas)?;
    draw_decision_outputs(canvas)?;
    draw_major_flows(canvas)?;
    draw_legend(canvas)
}

fn draw_header(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_text(
        CENTER_X,
        TITLE_Y,
        "TECM Framework: Detailed Model Architecture",
        &TextStyle::default().with_font_size(16.0).with_bold(true),
    )?;
    canvas.draw_text(
        CENTER_X,
        SUBTITLE_Y,
        "Task–Exposure–Congestion–Market Career Evolution Model",
        &TextStyle::default()
            .with_font_size(11.0)
            .with_italic(true)
            .with_color(palette::SUBTITLE),
    )
}

fn draw_data_sources(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_section_title(
        CENTER_X,
        DATA_TITLE_Y,
        "Data Sources",
        palette::BORDER_DATA,
        12.0,
    )?;

    let style = BoxStyle::new(palette::DATA, palette::BORDER_DATA).with_font_size(8.0);
    for (x, label) in DATA_SOURCES {
        canvas.draw_box(x, DATA_Y, DATA_BOX_WIDTH, 1.0, label, &style)?;
    }
    Ok(())
}

fn draw_model_one(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_section_title(
        CENTER_X,
        M1_TITLE_Y,
        "Model I: Task Decomposition & Risk Assessment",
        palette::BORDER_MODEL1,
        12.0,
    )?;

    let style = BoxStyle::new(palette::MODEL1, palette::BORDER_MODEL1).with_font_size(8.0);
    let parser = canvas.draw_box(
        1.0,
        M1_Y,
        4.0,
        M1_BOX_HEIGHT,
        "Task Parser\no = {(τₖ, wₖ, ξₖ, pₖ)}, k = 1…K",
        &style,
    )?;
    let exposure = canvas.draw_box(
        6.0,
        M1_Y,
        4.0,
        M1_BOX_HEIGHT,
        "Composite Exposure\nΞₒ = Σₖ wₖ ξₖ (1 − αₚ pₖ)",
        &style,
    )?;
    let protection = canvas.draw_box(
        11.0,
        M1_Y,
        4.0,
        M1_BOX_HEIGHT,
        "Physical Protection\nPᵢ = Σₖ wₖ pₖ (1 − ξₖ) / Σₖ wₖ",
        &style,
    )?;
    let outputs = canvas.draw_box(
        16.0,
        M1_Y,
        3.0,
        M1_BOX_HEIGHT,
        "Outputs:\nΞₒ, Pᵢ, A_cap",
        &style.clone().with_bold(true),
    )?;

    let arrow = ArrowStyle::default();
    canvas.draw_arrow(Point::new(3.0, DATA_Y), parser.top(), &arrow)?;
    canvas.draw_arrow(parser.right(), exposure.left(), &arrow)?;
    canvas.draw_arrow(exposure.right(), protection.left(), &arrow)?;
    canvas.draw_arrow(protection.right(), outputs.left(), &arrow)
}

fn draw_model_two(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_section_title(
        CENTER_X,
        M2_TITLE_Y,
        "Model II: Verification-Bottleneck Congestion Dynamics",
        palette::BORDER_MODEL2,
        12.0,
    )?;

    canvas.draw_panel(
        0.5,
        STATE_Y - 0.3,
        19.0,
        2.2,
        &PanelStyle::new("#F5F5F5", "#888888")
            .with_line_style(StrokeStyle::Dashed)
            .with_corner_radius(0.2)
            .with_alpha(0.5),
    )?;
    canvas.draw_text(
        CENTER_X,
        STATE_Y + 1.6,
        "State Variables (Shared Across Models)",
        &TextStyle::default()
            .with_font_size(9.0)
            .with_italic(true)
            .with_color(palette::ANNOTATION),
    )?;

    for (x, label, fill, border) in STATE_VARIABLES {
        canvas.draw_box(
            x,
            STATE_Y,
            STATE_BOX_WIDTH,
            STATE_BOX_HEIGHT,
            label,
            &BoxStyle::new(fill, border)
                .with_font_size(8.0)
                .with_line_width(2.0),
        )?;
    }

    let style = BoxStyle::new(palette::MODEL2, palette::BORDER_MODEL2).with_font_size(7.0);
    let adoption = canvas.draw_box(
        0.5,
        DYN_Y,
        5.5,
        DYN_BOX_HEIGHT,
        "Adoption Dynamics\ndA/dt = κ_A·A(1 − A/A_cap)\n− λ_G·A·max(ρ − ρ_th, 0)\n+ A_digital",
        &style,
    )?;
    let congestion = canvas.draw_box(
        6.5,
        DYN_Y,
        4.0,
        DYN_BOX_HEIGHT,
        "Congestion\nρ = θ_V·A(1 + γ_G·A) / (V_h,max(1 − ρ_V·A))\n(Quadratic growth)",
        &style,
    )?;
    let demand = canvas.draw_box(
        11.0,
        DYN_Y,
        4.0,
        DYN_BOX_HEIGHT,
        "Demand Rebound\n(Jevons Paradox)\nD = (C/C₀)^(−ε_D)\nC = C₀(1 − α_C·A)",
        &style,
    )?;
    let employment = canvas.draw_box(
        15.5,
        DYN_Y,
        4.0,
        DYN_BOX_HEIGHT,
        "Employment\ndE/dt = κ_E·Ξₒ·A\n×(1 − s(t)·A)\n×D(t)·E + δ₀·E",
        &style,
    )?;

    canvas.draw_box(
        6.5,
        DYN_Y - 2.8,
        6.5,
        1.8,
        "Dynamic Substitution Ratio (Educational Feedback)\n\
         s(t) = max(s_min, s_base / (1 + β_s·Vₛ(t)))  →  Tipping Point: A* = 1 / (2·s(t))",
        &BoxStyle::new(palette::FEEDBACK, palette::BORDER_FEEDBACK)
            .with_font_size(7.0)
            .with_line_width(2.0),
    )?;

    // State variables feed every dynamics box.
    let arrow = ArrowStyle::default();
    let dyn_top = DYN_Y + DYN_BOX_HEIGHT;
    for x in [3.25, 8.5, 13.0, 17.5] {
        canvas.draw_arrow(Point::new(x, STATE_Y), Point::new(x, dyn_top), &arrow)?;
    }

    // A → ρ → D → E
    canvas.draw_arrow(adoption.right(), congestion.left(), &arrow)?;
    canvas.draw_arrow(congestion.right(), demand.left(), &arrow)?;
    canvas.draw_arrow(demand.right(), employment.left(), &arrow)
}

fn draw_model_three(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_section_title(
        CENTER_X,
        M3_TITLE_Y,
        "Model III: Multi-Channel Learning & Educational Feedback",
        palette::BORDER_MODEL3,
        12.0,
    )?;

    let style = BoxStyle::new(palette::MODEL3, palette::BORDER_MODEL3).with_font_size(7.0);
    let on_job = canvas.draw_box(
        0.5,
        M3_Y,
        4.0,
        M3_BOX_HEIGHT,
        "On-Job Learning\nL_job = η_job·A\n(V_max − Vₛ)·𝟙[A > 0.05]",
        &style,
    )?;
    let social = canvas.draw_box(
        5.0,
        M3_Y,
        4.0,
        M3_BOX_HEIGHT,
        "Social Learning\nL_social = η_soc\nA(1 − A)√Vₛ\n(peaks at mid-adoption)",
        &style,
    )?;
    let autonomous = canvas.draw_box(
        9.5,
        M3_Y,
        4.0,
        M3_BOX_HEIGHT,
        "Autonomous Learning\nL_auto = η_auto\nVₛ(1 − Vₛ/V_max)",
        &style,
    )?;
    let capability = canvas.draw_box(
        14.0,
        M3_Y,
        5.5,
        M3_BOX_HEIGHT,
        "Capability Evolution\ndVₛ/dt = L_job + L_social\n+ L_auto − δ_V·Vₛ",
        &style.clone().with_bold(true),
    )?;

    canvas.draw_box(
        5.0,
        M3_Y - 2.0,
        9.5,
        1.5,
        "Educational Intervention: Vₛ,new = Vₛ + φ_curr·N_grad·Δt\n\
         Curriculum AI-intensity (φ) → Workforce capability boost",
        &BoxStyle::new(palette::FEEDBACK, palette::BORDER_FEEDBACK)
            .with_font_size(8.0)
            .with_line_width(2.0),
    )?;

    let arrow = ArrowStyle::default();
    canvas.draw_arrow(on_job.right(), social.left(), &arrow)?;
    canvas.draw_arrow(social.right(), autonomous.left(), &arrow)?;
    canvas.draw_arrow(autonomous.right(), capability.left(), &arrow)?;
    canvas.draw_arrow(
        Point::new(9.75, M3_Y),
        Point::new(9.75, M3_Y - 0.3),
        &arrow,
    )
}

fn draw_feedback_loops(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_text(
        CENTER_X,
        FEEDBACK_TITLE_Y,
        "Key Feedback Loops",
        &TextStyle::default()
            .with_font_size(11.0)
            .with_bold(true)
            .with_color(palette::BORDER_OUTPUT),
    )?;

    for (x, label, fill) in FEEDBACK_LOOPS {
        canvas.draw_box(
            x,
            FEEDBACK_Y,
            4.3,
            1.5,
            label,
            &BoxStyle::new(fill, palette::ANNOTATION)
                .with_font_size(7.0)
                .with_line_width(1.0),
        )?;
    }
    Ok(())
}

fn draw_decision_outputs(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_section_title(
        CENTER_X,
        OUTPUT_TITLE_Y,
        "Decision Outputs & Policy Recommendations",
        palette::BORDER_OUTPUT,
        12.0,
    )?;

    let style = BoxStyle::new(palette::OUTPUT, palette::BORDER_OUTPUT).with_font_size(8.0);
    for (x, label) in DECISION_OUTPUTS {
        canvas.draw_box(x, OUTPUT_Y, OUTPUT_BOX_WIDTH, 1.0, label, &style)?;
    }
    Ok(())
}

fn draw_major_flows(canvas: &mut Canvas) -> Result<(), FigureError> {
    let major = ArrowStyle::default()
        .with_head(ArrowHead::Filled)
        .with_line_width(2.0);
    let state_top = STATE_Y + STATE_BOX_HEIGHT;
    let dyn_top = DYN_Y + DYN_BOX_HEIGHT;

    // Model I into the state variables
    canvas.draw_arrow(Point::new(17.5, M1_Y), Point::new(17.5, state_top), &major)?;
    canvas.draw_text(
        18.2,
        (M1_Y + state_top) / 2.0,
        "Ξₒ, Pᵢ",
        &TextStyle::default()
            .with_font_size(8.0)
            .with_color(palette::ANNOTATION)
            .with_anchor(TextAnchor::Start),
    )?;

    // State into the dynamics
    canvas.draw_arrow(
        Point::new(CENTER_X, STATE_Y - 0.3),
        Point::new(CENTER_X, dyn_top),
        &major,
    )?;

    // Dynamics into the substitution ratio
    canvas.draw_arrow(
        Point::new(9.75, DYN_Y),
        Point::new(9.75, DYN_Y - 0.8),
        &ArrowStyle::default()
            .with_head(ArrowHead::Filled)
            .with_color(palette::BORDER_FEEDBACK),
    )?;

    // Substitution ratio back into employment
    canvas.draw_arrow(
        Point::new(13.0, DYN_Y - 1.9),
        Point::new(17.5, DYN_Y),
        &ArrowStyle::default()
            .with_color(palette::BORDER_FEEDBACK)
            .with_curvature(Curvature::new(-0.3))
            .with_line_style(StrokeStyle::Dashed),
    )?;

    // Model III into capability
    canvas.draw_arrow(
        Point::new(16.75, M3_Y + 2.2),
        Point::new(10.1, STATE_Y),
        &major.clone().with_curvature(Curvature::new(0.2)),
    )?;

    // Educational intervention into capability
    canvas.draw_arrow(
        Point::new(9.75, M3_Y - 0.5),
        Point::new(9.75, M3_Y),
        &ArrowStyle::default().with_color(palette::BORDER_FEEDBACK),
    )
}

fn draw_legend(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_panel(
        0.2,
        -0.8,
        19.6,
        0.9,
        &PanelStyle::new("#FAFAFA", "#CCCCCC").with_corner_radius(0.02),
    )?;

    let entries = [
        (1.0, line_entry(palette::ARROW_DIRECT, StrokeStyle::Solid, "Direct Effect")?),
        (4.5, line_entry(palette::ARROW_FEEDBACK, StrokeStyle::Dashed, "Feedback Loop")?),
        (8.5, color_entry(palette::MODEL1, "Model I")?),
        (11.0, color_entry(palette::MODEL2, "Model II")?),
        (13.5, color_entry(palette::MODEL3, "Model III")?),
        (16.5, color_entry("#F5F5F5", "State Var.")?),
    ];
    for (x, entry) in &entries {
        canvas.draw_legend_entry(*x, LEGEND_Y, entry)?;
    }
    Ok(())
}

fn line_entry(color: &str, style: StrokeStyle, label: &str) -> Result<LegendEntry, FigureError> {
    let stroke = StrokeDefinition::new(parse(color)?, 2.0).with_style(style);
    Ok(LegendEntry::line(stroke, label))
}

fn color_entry(color: &str, label: &str) -> Result<LegendEntry, FigureError> {
    Ok(LegendEntry::color(parse(color)?, label))
}

fn parse(color: &str) -> Result<Color, FigureError> {
    Color::new(color).map_err(FigureError::InvalidArgument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_every_section() {
        let mut canvas = Canvas::new(WIDTH, HEIGHT).unwrap();
        draw(&mut canvas).unwrap();
        let svg = canvas.render_svg();

        for heading in [
            "Data Sources",
            "Model I: Task Decomposition &amp; Risk Assessment",
            "Model II: Verification-Bottleneck Congestion Dynamics",
            "Model III: Multi-Channel Learning &amp; Educational Feedback",
            "Key Feedback Loops",
            "Decision Outputs &amp; Policy Recommendations",
        ] {
            assert!(svg.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_primitive_count() {
        let mut canvas = Canvas::new(WIDTH, HEIGHT).unwrap();
        draw(&mut canvas).unwrap();

        // 10 texts and titles, 33 boxes, 21 arrows, 2 panels and 6 legend entries.
        assert_eq!(canvas.primitive_count(), 10 + 33 + 21 + 8);
    }

    #[test]
    fn test_legend_uses_line_and_color_swatches() {
        let mut canvas = Canvas::new(WIDTH, HEIGHT).unwrap();
        draw_legend(&mut canvas).unwrap();
        let svg = canvas.render_svg();

        assert!(svg.contains("<line"));
        assert!(svg.contains("State Var."));
        assert_eq!(canvas.primitive_count(), 7);
    }
}
