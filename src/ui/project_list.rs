// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list panel.
//!
//! Lists every project known to the entity source and reports which one
//! the user clicked.

use crate::models::project::Project;

/// Result of project list interaction.
pub enum ProjectListAction {
    None,
    Select(Project),
    Refresh,
}

/// Display the project list.
pub fn show(ui: &mut egui::Ui, projects: &[Project], selected_id: i64) -> ProjectListAction {
    let mut action = ProjectListAction::None;

    ui.horizontal(|ui| {
        ui.heading("Projects");
        if ui.small_button("⟳").on_hover_text("Reload projects").clicked() {
            action = ProjectListAction::Refresh;
        }
    });
    ui.separator();

    if projects.is_empty() {
        ui.label(egui::RichText::new("No projects").weak());
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for project in projects {
            let label = format!("{}\n{}", project.name, project.created_on);
            if ui
                .selectable_label(project.id == selected_id, label)
                .clicked()
            {
                action = ProjectListAction::Select(project.clone());
            }
        }
    });

    action
}
