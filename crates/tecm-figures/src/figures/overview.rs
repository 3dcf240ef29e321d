//! "Framework Overview" figure.
//!
//! The condensed 16 × 12 unit version: the three models side by side, the
//! state variables they share, and the tipping point analysis they feed.

use tecm_figures_core::{
    draw::{ArrowHead, Curvature, StrokeStyle, TextAnchor},
    geometry::Point,
};

use super::palette;
use crate::{
    canvas::{ArrowStyle, BoxStyle, Canvas, TextStyle},
    error::FigureError,
};

pub const WIDTH: f32 = 16.0;
pub const HEIGHT: f32 = 12.0;

const CENTER_X: f32 = 8.0;
const TITLE_Y: f32 = 11.5;

const MODEL_Y: f32 = 7.0;
const MODEL_WIDTH: f32 = 4.5;
const MODEL_HEIGHT: f32 = 3.5;
const MODEL1_X: f32 = 0.5;
const MODEL2_X: f32 = 5.75;
const MODEL3_X: f32 = 11.0;

const FEEDBACK_LABEL_Y: f32 = 6.0;

/// Draws the whole figure onto a 16 × 12 canvas.
pub fn draw(canvas: &mut Canvas) -> Result<(), FigureError> {
    canvas.draw_text(
        CENTER_X,
        TITLE_Y,
        "TECM Framework Overview",
        &TextStyle::default().with_font_size(14.0).with_bold(true),
    )?;

    let model_one = canvas.draw_box(
        MODEL1_X,
        MODEL_Y,
        MODEL_WIDTH,
        MODEL_HEIGHT,
        "Model I\nTask Decomposition\n& Risk Assessment\n\nΞₒ = Σₖ wₖ ξₖ (1 − αₚ pₖ)\nPᵢ = Physical Protection",
        &BoxStyle::new(palette::MODEL1, palette::BORDER_MODEL1),
    )?;
    let model_two = canvas.draw_box(
        MODEL2_X,
        MODEL_Y,
        MODEL_WIDTH,
        MODEL_HEIGHT,
        "Model II\nVBC Dynamics\n\ndA/dt, dE/dt\nρ(t) = Congestion\nD(t) = Demand (Jevons)",
        &BoxStyle::new(palette::MODEL2, palette::BORDER_MODEL2),
    )?;
    let model_three = canvas.draw_box(
        MODEL3_X,
        MODEL_Y,
        MODEL_WIDTH,
        MODEL_HEIGHT,
        "Model III\nMulti-Channel Learning\n\ndVₛ/dt = L_job + L_soc\n+ L_auto − δ_V·Vₛ\nEducational Feedback",
        &BoxStyle::new(palette::MODEL3, palette::BORDER_MODEL3),
    )?;

    let state = canvas.draw_box(
        4.0,
        4.0,
        8.0,
        2.0,
        "Shared State Variables\n\
         A(t) Adoption  |  E(t) Employment  |  Vₛ(t) Capability  |  ρ(t) Congestion  |  D(t) Demand",
        &BoxStyle::new("#F5F5F5", palette::BORDER_STATE).with_line_width(2.0),
    )?;
    let tipping_point = canvas.draw_box(
        5.0,
        1.5,
        6.0,
        1.5,
        "Tipping Point Analysis\nA*(t) = 1 / (2·s(t)) where s(t) = s_base / (1 + β_s·Vₛ(t))",
        &BoxStyle::new(palette::FEEDBACK, palette::BORDER_FEEDBACK).with_line_width(2.0),
    )?;

    // Every model writes into the shared state, which drives the tipping point.
    let flow = ArrowStyle::default()
        .with_head(ArrowHead::Filled)
        .with_line_width(2.0);
    canvas.draw_arrow(model_one.bottom(), Point::new(6.0, 5.5), &flow)?;
    canvas.draw_arrow(model_two.bottom(), state.top(), &flow)?;
    canvas.draw_arrow(model_three.bottom(), Point::new(10.0, 5.5), &flow)?;
    canvas.draw_arrow(state.bottom(), tipping_point.top(), &flow)?;

    // Feedback from the state back into Models I and III.
    let feedback = ArrowStyle::default()
        .with_color(palette::ARROW_FEEDBACK)
        .with_line_style(StrokeStyle::Dashed);
    let label = TextStyle::default()
        .with_font_size(8.0)
        .with_color(palette::ARROW_FEEDBACK)
        .with_anchor(TextAnchor::Start);

    canvas.draw_arrow(
        state.right(),
        model_three.bottom(),
        &feedback.clone().with_curvature(Curvature::new(0.3)),
    )?;
    canvas.draw_text(13.5, FEEDBACK_LABEL_Y, "Vₛ → s↓", &label)?;

    canvas.draw_arrow(
        state.left(),
        model_one.bottom(),
        &feedback.with_curvature(Curvature::new(-0.3)),
    )?;
    canvas.draw_text(2.0, FEEDBACK_LABEL_Y, "Ξₒ, Pᵢ", &label)
}
