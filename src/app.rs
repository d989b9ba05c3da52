// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `EditorApp` wires the project list, the selection stream, the refresh
//! signal and the `ProjectEditor` view model together, and renders the
//! panels each frame.

use crate::editor::ProjectEditor;
use crate::error::EditorError;
use crate::io::{config::EditorConfig, media};
use crate::models::project::Project;
use crate::selection::{ProjectSelector, ProjectSubscription, Refresh, UpdatorService};
use crate::source::{EntitySource, PlaceholderSource};
use crate::ui::{
    dialogs::{self, DialogAction},
    entity_editor::{self, EntityEditorAction},
    entity_list::{self, EntityListAction},
    project_list::{self, ProjectListAction},
};

/// Decoded preview of an inline entity picture, keyed by its payload.
struct PicturePreview {
    location: String,
    texture: Option<egui::TextureHandle>,
}

/// Main application state.
pub struct EditorApp {
    /// View model of the editor panels
    editor: ProjectEditor,

    /// Source used to list projects
    source: Box<dyn EntitySource>,

    /// Projects shown in the left panel
    projects: Vec<Project>,

    /// Publishes the project picked in the list
    selector: ProjectSelector,

    /// Editor side of the selection stream
    subscription: ProjectSubscription,

    /// Refresh requests from the editor
    updator: UpdatorService,

    /// Text typed in the rename dialog
    rename_buffer: String,

    /// Text typed in the new entity dialog
    new_entity_buffer: String,

    picture_preview: Option<PicturePreview>,
}

impl EditorApp {
    /// Create the application from its configuration.
    pub fn new(config: &EditorConfig) -> Self {
        let source = PlaceholderSource::new(config);
        let updator = UpdatorService::new();
        let mut selector = ProjectSelector::new();
        let subscription = selector.subscribe();

        let mut app = Self {
            editor: ProjectEditor::new(Box::new(source.clone()), Box::new(updator.clone())),
            source: Box::new(source),
            projects: Vec::new(),
            selector,
            subscription,
            updator,
            rename_buffer: String::new(),
            new_entity_buffer: String::new(),
            picture_preview: None,
        };
        app.reload_projects();
        app
    }

    /// Fetch the project list again.
    fn reload_projects(&mut self) {
        match self.source.projects() {
            Ok(projects) => {
                log::info!("Loaded {} projects", projects.len());
                self.projects = projects;
            }
            Err(e) => self.editor.report(&EditorError::Source(e)),
        }
    }

    /// Apply pending refresh requests and published projects.
    ///
    /// Returns true when anything changed.
    fn sync_pending(&mut self) -> bool {
        let mut changed = false;

        // Project list changed (rename, delete, manual reload)
        if self.updator.take_pending() > 0 {
            self.reload_projects();
            changed = true;
        }

        for project in self.subscription.drain() {
            self.editor.on_project_selected(project);
            changed = true;
        }

        changed
    }

    /// Decode the selected entity's inline picture when it changes.
    fn update_picture_preview(&mut self, ctx: &egui::Context) {
        let location = self
            .editor
            .entity_selected()
            .and_then(|entity| entity.picture.as_ref())
            .map(|picture| picture.location.clone())
            .filter(|location| !media::is_remote(location));

        let Some(location) = location else {
            self.picture_preview = None;
            return;
        };

        if self
            .picture_preview
            .as_ref()
            .is_some_and(|preview| preview.location == location)
        {
            return;
        }

        let texture = match media::load_image_payload(&location) {
            Ok(loaded) => {
                let size = [loaded.width as usize, loaded.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                Some(ctx.load_texture("entity_picture", color_image, egui::TextureOptions::LINEAR))
            }
            Err(e) => {
                log::warn!("Cannot preview entity picture: {:#}", e);
                None
            }
        };

        self.picture_preview = Some(PicturePreview { location, texture });
    }

    fn handle_entity_list(&mut self, action: EntityListAction) {
        match action {
            EntityListAction::FilterChanged(filter) => self.editor.set_filter(filter),
            EntityListAction::SelectEntity(entity) => self.editor.select_entity(entity),
            EntityListAction::ShowRename => {
                self.rename_buffer = self.editor.project().name.clone();
                self.editor.show_rename_project();
            }
            EntityListAction::ShowNewEntity => {
                self.new_entity_buffer.clear();
                self.editor.show_new_entity();
            }
            EntityListAction::DeleteProject => {
                let confirmed = rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("Delete project")
                    .set_description(format!(
                        "Delete project '{}' and all of its entities?",
                        self.editor.project().name
                    ))
                    .set_buttons(rfd::MessageButtons::YesNo)
                    .show();

                if matches!(confirmed, rfd::MessageDialogResult::Yes) {
                    if let Err(e) = self.editor.delete_project() {
                        self.editor.report(&e);
                    }
                }
            }
            EntityListAction::ReloadMarker => self.editor.reload_marker(),
            EntityListAction::None => {}
        }
    }

    fn handle_entity_editor(&mut self, action: EntityEditorAction) {
        match action {
            EntityEditorAction::SetMode(mode) => self.editor.set_edit_mode(mode),
            EntityEditorAction::UploadTrackedPicture => self.editor.upload_new_tracked_picture(),
            EntityEditorAction::DeleteTrackedPicture => self.editor.delete_tracked_picture(),
            EntityEditorAction::UploadPicture => self.editor.upload_new_picture(),
            EntityEditorAction::DeletePicture => self.editor.delete_picture(),
            EntityEditorAction::UploadAudio => self.editor.upload_new_audio(),
            EntityEditorAction::DeleteAudio => self.editor.delete_audio(),
            EntityEditorAction::Save => self.editor.save_entity(),
            EntityEditorAction::Exit => self.editor.exit_edition(),
            EntityEditorAction::None => {}
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if self.editor.rename_view() {
            match dialogs::name_prompt(ctx, "Rename project", &mut self.rename_buffer) {
                DialogAction::Confirm(name) => {
                    if let Err(e) = self.editor.rename_project(&name) {
                        self.editor.report(&e);
                    }
                }
                DialogAction::Cancel => self.editor.hide_rename_project(),
                DialogAction::None => {}
            }
        }

        if self.editor.new_entity_view() {
            match dialogs::name_prompt(ctx, "New entity", &mut self.new_entity_buffer) {
                DialogAction::Confirm(name) => {
                    if let Err(e) = self.editor.create_new_entity(&name) {
                        self.editor.report(&e);
                    }
                }
                DialogAction::Cancel => self.editor.hide_new_entity(),
                DialogAction::None => {}
            }
        }

        if let Some(message) = self.editor.last_error() {
            if dialogs::error_popup(ctx, message) {
                self.editor.dismiss_error();
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_pending();
        self.update_picture_preview(ctx);

        // Project list (left side)
        let selected_id = self.editor.project().id;
        let list_action = egui::SidePanel::left("projects")
            .default_width(200.0)
            .show(ctx, |ui| project_list::show(ui, &self.projects, selected_id))
            .inner;

        match list_action {
            ProjectListAction::Select(project) => self.selector.publish(project),
            ProjectListAction::Refresh => self.updator.refresh(),
            ProjectListAction::None => {}
        }

        // Entity edit panel (right side)
        if self.editor.edit_entity_view() {
            if let Some(entity) = self.editor.entity_selected() {
                let texture = self
                    .picture_preview
                    .as_ref()
                    .and_then(|preview| preview.texture.as_ref());
                let mode = self.editor.edit_mode();
                let saved = self.editor.saved();

                let editor_action = egui::SidePanel::right("entity_editor")
                    .default_width(320.0)
                    .show(ctx, |ui| entity_editor::show(ui, entity, mode, saved, texture))
                    .inner;

                self.handle_entity_editor(editor_action);
            }
        }

        // Entity list (center)
        let selected_entity = self.editor.entity_selected().map(|entity| entity.id);
        let entity_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                entity_list::show(
                    ui,
                    self.editor.project(),
                    self.editor.entities_filtered(),
                    self.editor.filter(),
                    selected_entity,
                )
            })
            .inner;

        self.handle_entity_list(entity_action);

        self.show_dialogs(ctx);

        // Selections and refreshes made this frame are drawn on the next one
        if self.sync_pending() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> EditorApp {
        EditorApp::new(&EditorConfig {
            project_count: 3,
            ..EditorConfig::default()
        })
    }

    #[test]
    fn test_new_app_lists_projects() {
        let app = app();
        assert_eq!(app.projects.len(), 3);
        assert!(app.editor.project().is_unselected());
    }

    #[test]
    fn test_sync_applies_published_project() {
        let mut app = app();
        assert!(!app.sync_pending());

        app.selector.publish(Project::new(2, "Project 2", "01/01/2024"));
        assert!(app.sync_pending());
        assert_eq!(app.editor.project().id, 2);
        assert_eq!(app.editor.entities().len(), 2);
        assert!(!app.sync_pending());
    }

    #[test]
    fn test_sync_reloads_projects_after_refresh() {
        let mut app = app();
        app.selector.publish(Project::new(2, "Project 2", "01/01/2024"));
        app.sync_pending();

        app.projects.clear();
        app.editor.rename_project("Renamed").unwrap();
        assert!(app.sync_pending());
        assert_eq!(app.projects.len(), 3);
        assert_eq!(app.editor.project().name, "Renamed");
    }
}
