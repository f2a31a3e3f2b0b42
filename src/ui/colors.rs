//! Background colours for the root container and text area.

use egui::{Color32, Visuals};

use crate::engine::theme::GreenColor;

/// How far the root container tint is pushed toward white.
pub const OUTER_TINT: f32 = 0.55;

pub fn to_color32(c: GreenColor) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// `(root, text area)` fills for the current theme; falls back to the egui
/// visuals when no green has been picked yet.
pub fn backgrounds(theme: Option<GreenColor>, visuals: &Visuals) -> (Color32, Color32) {
    match theme {
        Some(c) => (to_color32(c.lighten(OUTER_TINT)), to_color32(c)),
        None => (visuals.panel_fill, visuals.extreme_bg_color),
    }
}
