//! TECM Figures Core Types
//!
//! This crate provides the foundational types used to draw the TECM
//! architecture figures. It includes:
//!
//! - **Colors**: CSS color parsing and SVG serialization ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and insets in canvas units ([`geometry`] module)
//! - **Draw**: Drawable primitives and their styles, rendered to layered SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
