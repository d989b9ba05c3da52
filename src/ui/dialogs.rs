// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Modal windows: rename project, new entity and error popup.

/// Result of a text input dialog.
pub enum DialogAction {
    None,
    Confirm(String),
    Cancel,
}

/// Show a window asking for a name. `buffer` holds the text being typed.
pub fn name_prompt(ctx: &egui::Context, title: &str, buffer: &mut String) -> DialogAction {
    let mut action = DialogAction::None;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let response = ui.add(egui::TextEdit::singleline(&mut *buffer).hint_text("Name"));
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.label(
                egui::RichText::new("Letters, digits, '-', '_' and '.' only")
                    .small()
                    .weak(),
            );

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    action = DialogAction::Confirm(buffer.trim().to_string());
                }
                if ui.button("Cancel").clicked() {
                    action = DialogAction::Cancel;
                }
            });
        });

    action
}

/// Show the last error. Returns true when the user dismissed it.
pub fn error_popup(ctx: &egui::Context, message: &str) -> bool {
    let mut dismissed = false;

    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 40.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(message).color(egui::Color32::LIGHT_RED));
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    dismissed
}
