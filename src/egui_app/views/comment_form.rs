use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Author/text/post bar at the bottom of the window
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::form_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.author_input)
                    .hint_text("Your name...")
                    .desired_width(150.0),
            );

            let text_width = (ui.available_width() - 90.0).max(200.0);
            let text = ui.add(
                egui::TextEdit::singleline(&mut state.text_input)
                    .hint_text("Say something...")
                    .desired_width(text_width),
            );

            let submitted_with_enter =
                text.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));

            if ui.add(styles::primary_button("post")).clicked() || submitted_with_enter {
                state.handle_submit();
            }
        });

        if let Some(error) = &state.form_error {
            ui.colored_label(colors::ERROR, error);
        }
    });
}
