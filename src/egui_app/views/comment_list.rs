//! Comment list view
//!
//! One card per cache entry: author heading, rendered body, and the `update`
//! and `delete` actions. Pending cards are dimmed and their actions disabled,
//! since only a durable id may address a mutation.

use eframe::egui;

use crate::egui_app::markdown;
use crate::egui_app::state::AppState;
use crate::egui_app::sync::CachedComment;
use crate::egui_app::theme::{colors, styles};
use crate::shared::DurableId;

enum ListAction {
    BeginEdit(CachedComment),
    SaveEdit,
    CancelEdit,
    Delete(DurableId),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let entries = state.reconciler.cache().entries().to_vec();
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if entries.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No comments yet.");
            }

            for entry in &entries {
                if let Some(next) = render_card(ui, state, entry) {
                    action = Some(next);
                }
                ui.add_space(6.0);
            }
        });

    match action {
        Some(ListAction::BeginEdit(entry)) => state.begin_edit(&entry),
        Some(ListAction::SaveEdit) => state.handle_save_edit(),
        Some(ListAction::CancelEdit) => state.cancel_edit(),
        Some(ListAction::Delete(id)) => state.handle_delete(&id),
        None => {}
    }
}

fn render_card(ui: &mut egui::Ui, state: &mut AppState, entry: &CachedComment) -> Option<ListAction> {
    let pending = entry.is_pending();
    let mut action = None;

    styles::card_frame(pending).show(ui, |ui| {
        ui.set_width(ui.available_width());

        let editing = match (&mut state.editing, entry.durable_id()) {
            (Some(edit), Some(id)) if &edit.id == id => Some(edit),
            _ => None,
        };

        if let Some(edit) = editing {
            ui.add(egui::TextEdit::singleline(&mut edit.author_input).hint_text("Your name..."));
            ui.add(
                egui::TextEdit::multiline(&mut edit.text_input)
                    .hint_text("Say something...")
                    .desired_rows(2),
            );
            ui.horizontal(|ui| {
                if ui.button("save").clicked() {
                    action = Some(ListAction::SaveEdit);
                }
                if ui.button("cancel").clicked() {
                    action = Some(ListAction::CancelEdit);
                }
            });
            return;
        }

        let author = entry.author.as_deref().unwrap_or("anonymous");
        let heading_color = if pending {
            colors::TEXT_SECONDARY
        } else {
            colors::TEXT_DARK
        };
        ui.label(egui::RichText::new(author).heading().color(heading_color));

        let body = entry.text.as_deref().unwrap_or_default();
        ui.add_enabled_ui(!pending, |ui| {
            ui.label(markdown::layout_job(ui, body));

            ui.horizontal(|ui| {
                if ui.small_button("update").clicked() {
                    action = Some(ListAction::BeginEdit(entry.clone()));
                }
                let delete = egui::RichText::new("delete").color(colors::DELETE_LINK);
                if ui.small_button(delete).clicked() {
                    if let Some(id) = entry.durable_id() {
                        action = Some(ListAction::Delete(id.clone()));
                    }
                }
                if pending {
                    ui.colored_label(colors::TEXT_SECONDARY, "posting...");
                }
            });
        });
    });

    action
}
