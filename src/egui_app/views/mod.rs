use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::sync::{SyncPhase, SyncStatus};
use crate::egui_app::theme::{colors, styles};

pub mod comment_form;
pub mod comment_list;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let status = state.reconciler.status();

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new("COMMENTS:").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    render_status(ui, state, &status);
                });
            });
        });
}

/// Sync phase plus the latest notice, which can be dismissed
fn render_status(ui: &mut egui::Ui, state: &mut AppState, status: &SyncStatus) {
    match status.phase {
        SyncPhase::Pending => {
            ui.colored_label(
                colors::WARNING,
                format!("syncing ({} pending)", status.outstanding_writes),
            );
        }
        SyncPhase::Settled => {
            let label = match status.last_refresh {
                Some(at) => format!("up to date {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")),
                None => "connecting...".to_string(),
            };
            ui.colored_label(colors::SUCCESS, label);
        }
    }

    if let Some(error) = &status.last_error {
        ui.add_space(12.0);
        if ui.small_button("x").clicked() {
            state.reconciler.dismiss_error();
        }
        ui.colored_label(colors::ERROR, error);
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("comment_form")
        .frame(egui::Frame::new())
        .show(ctx, |ui| comment_form::render(ui, state));

    egui::CentralPanel::default()
        .frame(styles::list_frame())
        .show(ctx, |ui| comment_list::render(ui, state));
}
