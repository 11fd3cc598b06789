//! Theme Styling Functions
//!
//! Helpers that apply the brown color scheme consistently across the
//! comment window.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    style.visuals.window_fill = colors::LIST_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::PANEL_BG;

    style.visuals.widgets.noninteractive.bg_fill = colors::FORM_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.inactive.bg_fill = colors::FORM_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.hovered.bg_fill = colors::HOVER_ITEM;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::BUTTON_PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::SELECTION;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the comment list area
pub fn list_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::LIST_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the submit form
pub fn form_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::FORM_BG)
        .stroke(Stroke::new(1.0, colors::FORM_BORDER))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for one comment card
///
/// Pending cards are drawn translucent.
pub fn card_frame(pending: bool) -> egui::Frame {
    let fill = if pending {
        Color32::from_rgba_unmultiplied(
            colors::CARD_BG.r(),
            colors::CARD_BG.g(),
            colors::CARD_BG.b(),
            110,
        )
    } else {
        colors::CARD_BG
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 6))
}

/// Primary action button
pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label.to_uppercase()).color(colors::TEXT_LIGHT))
        .fill(colors::BUTTON_PRIMARY)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(3))
}
