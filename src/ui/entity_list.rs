// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Entity list with project header and search bar.

use crate::models::{entity::Entity, project::Project};
use crate::util::format;

/// Result of entity list interaction.
pub enum EntityListAction {
    None,
    FilterChanged(String),
    SelectEntity(Entity),
    ShowRename,
    DeleteProject,
    ShowNewEntity,
    ReloadMarker,
}

/// Display the project header, the filter box and the filtered entities.
pub fn show(
    ui: &mut egui::Ui,
    project: &Project,
    entities: &[Entity],
    filter: &str,
    selected_id: Option<i64>,
) -> EntityListAction {
    let mut action = EntityListAction::None;

    if project.is_unselected() {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new(&project.name)
                    .size(18.0)
                    .color(egui::Color32::from_gray(160)),
            );
        });
        return action;
    }

    ui.horizontal(|ui| {
        ui.heading(&project.name);
        ui.label(egui::RichText::new(format!("created {}", project.created_on)).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🗑 Delete").clicked() {
                action = EntityListAction::DeleteProject;
            }
            if ui.button("✏ Rename").clicked() {
                action = EntityListAction::ShowRename;
            }
            if ui.button("⟳ Markers").on_hover_text("Rebuild AR markers").clicked() {
                action = EntityListAction::ReloadMarker;
            }
        });
    });
    ui.separator();

    ui.horizontal(|ui| {
        let mut text = filter.to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Search entities...")
                .desired_width(240.0),
        );
        if response.changed() {
            action = EntityListAction::FilterChanged(text);
        }
        if ui.button("➕ New entity").clicked() {
            action = EntityListAction::ShowNewEntity;
        }
    });
    ui.add_space(4.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("entity_grid")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for entity in entities {
                    if ui
                        .selectable_label(selected_id == Some(entity.id), &entity.name)
                        .clicked()
                    {
                        action = EntityListAction::SelectEntity(entity.clone());
                    }
                    ui.label(&entity.created_on);
                    ui.label(format::format_size(entity.media_size()));
                    ui.end_row();
                }
            });

        if entities.is_empty() {
            ui.label(egui::RichText::new("No entities").weak());
        }
    });

    action
}
