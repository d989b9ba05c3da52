// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project editor state.
//!
//! `ProjectEditor` is the view model behind the editor panels. It holds the
//! selected project, its entities, the filtered view shown in the list and
//! the visibility flags of the edit, rename and create panels. The GUI only
//! reads this state and forwards user actions to it.
//!
//! Server calls are not wired up yet: every server-bound action logs under
//! a `server::<action>` target and updates local state only.

use crate::error::EditorError;
use crate::models::{entity::Entity, project::Project};
use crate::selection::Refresh;
use crate::source::EntitySource;

/// Which edit block is shown for the selected entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Video,
    Image,
}

/// Check a project or entity name.
///
/// Names may only contain ASCII letters, digits, '-', '_' and '.'.
pub fn validate_name(name: &str) -> Result<(), EditorError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(EditorError::InvalidName(name.to_string()))
    }
}

/// View model of the project editor.
pub struct ProjectEditor {
    source: Box<dyn EntitySource>,
    updator: Box<dyn Refresh>,

    /// Currently edited project (the sentinel when none is selected)
    project: Project,
    /// Every entity of the project, unfiltered
    entities: Vec<Entity>,
    /// Entities matching `filter`
    entities_filtered: Vec<Entity>,
    filter: String,
    /// Entity shown in the edit panel
    entity_selected: Option<Entity>,
    edit_mode: EditMode,
    /// Whether the selected entity has been saved since its last change
    saved: bool,

    rename_view: bool,
    edit_entity_view: bool,
    new_entity_view: bool,

    /// Last failure to show to the user
    last_error: Option<String>,
}

impl ProjectEditor {
    pub fn new(source: Box<dyn EntitySource>, updator: Box<dyn Refresh>) -> Self {
        Self {
            source,
            updator,
            project: Project::unselected(),
            entities: Vec::new(),
            entities_filtered: Vec::new(),
            filter: String::new(),
            entity_selected: None,
            edit_mode: EditMode::default(),
            saved: false,
            rename_view: false,
            edit_entity_view: false,
            new_entity_view: false,
            last_error: None,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_filtered(&self) -> &[Entity] {
        &self.entities_filtered
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn entity_selected(&self) -> Option<&Entity> {
        self.entity_selected.as_ref()
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn rename_view(&self) -> bool {
        self.rename_view
    }

    pub fn edit_entity_view(&self) -> bool {
        self.edit_entity_view
    }

    pub fn new_entity_view(&self) -> bool {
        self.new_entity_view
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record a failure for display.
    pub fn report(&mut self, error: &EditorError) {
        log::error!("{}", error);
        self.last_error = Some(error.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Handle a project published by the project list.
    pub fn on_project_selected(&mut self, project: Project) {
        log::info!("Project selected: {} ({})", project.id, project.name);
        self.project = project;
        self.update_project_selected();
    }

    /// Reload the entities of the current project and reset the view.
    pub fn update_project_selected(&mut self) {
        self.entity_selected = None;
        self.edit_entity_view = false;
        self.rename_view = false;
        self.new_entity_view = false;
        self.saved = false;
        self.filter.clear();

        match self.source.entities(&self.project) {
            Ok(entities) => self.entities = entities,
            Err(e) => {
                self.entities = Vec::new();
                self.report(&EditorError::Source(e));
            }
        }
        self.entities_filtered = self.entities.clone();
    }

    /// Change the filter text and recompute the filtered list.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.filter_list();
    }

    /// Keep the entities whose name contains the filter (case-sensitive).
    pub fn filter_list(&mut self) {
        self.entities_filtered = if self.filter.is_empty() {
            self.entities.clone()
        } else {
            self.entities
                .iter()
                .filter(|entity| entity.name.contains(self.filter.as_str()))
                .cloned()
                .collect()
        };
    }

    /// Request creation of a new entity in the current project.
    pub fn create_new_entity(&mut self, name: &str) -> Result<(), EditorError> {
        validate_name(name)?;
        log::info!(target: "server::create_entity", "Create entity '{}' in project {}", name, self.project.id);
        self.hide_new_entity();
        Ok(())
    }

    pub fn upload_new_tracked_picture(&mut self) {
        self.log_media_action("upload_tracked_picture", "Upload new tracked picture");
    }

    pub fn delete_tracked_picture(&mut self) {
        self.log_media_action("delete_tracked_picture", "Delete tracked picture");
    }

    pub fn upload_new_picture(&mut self) {
        self.log_media_action("upload_picture", "Upload new picture");
    }

    pub fn delete_picture(&mut self) {
        self.log_media_action("delete_picture", "Delete picture");
    }

    pub fn upload_new_audio(&mut self) {
        self.log_media_action("upload_audio", "Upload new audio");
    }

    pub fn delete_audio(&mut self) {
        self.log_media_action("delete_audio", "Delete audio");
    }

    fn log_media_action(&mut self, action: &str, message: &str) {
        let entity = self.entity_selected.as_ref().map(|e| e.id);
        log::info!(target: "server::media", "{} ({}) for entity {:?}", message, action, entity);
        self.saved = false;
    }

    pub fn reload_marker(&mut self) {
        log::info!(target: "server::reload_marker", "Marker reloaded for project {}", self.project.id);
    }

    /// Push the selected entity to the server.
    pub fn save_entity(&mut self) {
        log::info!(target: "server::save_entity", "Save entity {:?}", self.entity_selected.as_ref().map(|e| e.id));
        self.saved = true;
    }

    /// Delete the current project and go back to the "select a project" state.
    pub fn delete_project(&mut self) -> Result<(), EditorError> {
        // Nothing to delete on the sentinel, and no refresh is signalled
        if self.project.is_unselected() {
            return Err(EditorError::NoProjectSelected);
        }

        log::info!(target: "server::delete_project", "Delete project {}", self.project.id);
        self.updator.refresh();
        self.on_project_selected(Project::unselected());
        Ok(())
    }

    /// Rename the current project.
    pub fn rename_project(&mut self, new_name: &str) -> Result<(), EditorError> {
        if self.project.is_unselected() {
            return Err(EditorError::NoProjectSelected);
        }
        validate_name(new_name)?;

        log::info!(target: "server::rename_project", "Rename project {} to '{}'", self.project.id, new_name);
        self.updator.refresh();
        // Update locally so the project does not have to be fetched again
        self.project.name = new_name.to_string();
        self.hide_rename_project();
        Ok(())
    }

    /// Open the edit panel for `entity`.
    pub fn select_entity(&mut self, entity: Entity) {
        if entity.picture.is_some() {
            self.edit_mode = EditMode::Image;
        }
        log::debug!("Selected entity {} ({:?} mode)", entity.id, self.edit_mode);
        self.entity_selected = Some(entity);
        self.show_edit_entity();
    }

    /// Switch between the video and image edit blocks.
    pub fn set_edit_mode(&mut self, mode: EditMode) {
        if self.edit_mode != mode {
            self.edit_mode = mode;
            self.saved = false;
        }
    }

    /// Leave the edit panel.
    pub fn exit_edition(&mut self) {
        self.entity_selected = None;
        self.saved = false;
        self.hide_edit_entity();
    }

    pub fn show_edit_entity(&mut self) {
        self.edit_entity_view = true;
    }

    pub fn hide_edit_entity(&mut self) {
        self.edit_entity_view = false;
    }

    pub fn show_rename_project(&mut self) {
        self.rename_view = true;
    }

    pub fn hide_rename_project(&mut self) {
        self.rename_view = false;
    }

    pub fn show_new_entity(&mut self) {
        self.new_entity_view = true;
    }

    pub fn hide_new_entity(&mut self) {
        self.new_entity_view = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::EditorConfig;
    use crate::models::entity::MediaRef;
    use crate::selection::UpdatorService;
    use crate::source::PlaceholderSource;

    /// Source returning a fixed list of entities for every project.
    struct FixedSource(Vec<Entity>);

    impl EntitySource for FixedSource {
        fn projects(&self) -> anyhow::Result<Vec<Project>> {
            Ok(Vec::new())
        }

        fn entities(&self, _project: &Project) -> anyhow::Result<Vec<Entity>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl EntitySource for FailingSource {
        fn projects(&self) -> anyhow::Result<Vec<Project>> {
            anyhow::bail!("backend unreachable")
        }

        fn entities(&self, _project: &Project) -> anyhow::Result<Vec<Entity>> {
            anyhow::bail!("backend unreachable")
        }
    }

    fn named(names: &[&str]) -> Vec<Entity> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Entity::new(i as i64, *name, "01/01/2024"))
            .collect()
    }

    fn placeholder_editor() -> (ProjectEditor, UpdatorService) {
        let updator = UpdatorService::new();
        let source = PlaceholderSource::new(&EditorConfig::default());
        (ProjectEditor::new(Box::new(source), Box::new(updator.clone())), updator)
    }

    fn fixed_editor(entities: Vec<Entity>) -> (ProjectEditor, UpdatorService) {
        let updator = UpdatorService::new();
        let mut editor = ProjectEditor::new(Box::new(FixedSource(entities)), Box::new(updator.clone()));
        editor.on_project_selected(Project::new(1, "Museum", "01/01/2024"));
        (editor, updator)
    }

    fn names(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let (editor, _) = placeholder_editor();
        assert!(editor.project().is_unselected());
        assert!(editor.entities().is_empty());
        assert!(editor.entity_selected().is_none());
        assert_eq!(editor.edit_mode(), EditMode::Video);
        assert!(!editor.saved());
        assert!(!editor.rename_view() && !editor.edit_entity_view() && !editor.new_entity_view());
    }

    #[test]
    fn test_project_id_sets_entity_count() {
        let (mut editor, _) = placeholder_editor();
        for id in [0, 1, 5, 12] {
            editor.on_project_selected(Project::new(id, "p", "01/01/2024"));
            assert_eq!(editor.entities().len(), id as usize);
            assert_eq!(editor.entities_filtered(), editor.entities());
        }
    }

    #[test]
    fn test_project_change_resets_view() {
        let (mut editor, _) = fixed_editor(named(&["alpha", "beta"]));
        editor.set_filter("al");
        editor.select_entity(editor.entities()[0].clone());
        editor.save_entity();
        editor.show_rename_project();
        editor.show_new_entity();

        editor.on_project_selected(Project::new(2, "Other", "01/01/2024"));

        assert_eq!(editor.project().id, 2);
        assert_eq!(editor.filter(), "");
        assert_eq!(editor.entities_filtered().len(), 2);
        assert!(editor.entity_selected().is_none());
        assert!(!editor.edit_entity_view());
        assert!(!editor.rename_view());
        assert!(!editor.new_entity_view());
        assert!(!editor.saved());
    }

    #[test]
    fn test_delete_project_closes_open_dialogs() {
        let (mut editor, _) = fixed_editor(named(&["a"]));
        editor.show_rename_project();
        editor.show_new_entity();

        editor.delete_project().unwrap();
        assert!(editor.project().is_unselected());
        assert!(!editor.rename_view());
        assert!(!editor.new_entity_view());
    }

    #[test]
    fn test_filter_is_case_sensitive_substring() {
        let (mut editor, _) = fixed_editor(named(&["Entity 1", "Entity 12", "entity 2", "Statue"]));

        editor.set_filter("Entity 1");
        assert_eq!(names(editor.entities_filtered()), vec!["Entity 1", "Entity 12"]);

        editor.set_filter("ntity");
        assert_eq!(names(editor.entities_filtered()), vec!["Entity 1", "Entity 12", "entity 2"]);

        editor.set_filter("ENTITY");
        assert!(editor.entities_filtered().is_empty());
    }

    #[test]
    fn test_empty_filter_restores_full_list() {
        let (mut editor, _) = fixed_editor(named(&["a", "b", "c"]));
        editor.set_filter("b");
        assert_eq!(editor.entities_filtered().len(), 1);

        editor.set_filter("");
        assert_eq!(editor.entities_filtered(), editor.entities());
    }

    #[test]
    fn test_filter_matches_predicate_for_many_inputs() {
        let list = named(&["Entity 0", "Entity 10", "Gate", "gate", "", "10 Gate"]);
        let (mut editor, _) = fixed_editor(list.clone());

        for filter in ["", "Entity", "0", "Gate", "ate", " ", "zzz", "10 G"] {
            editor.set_filter(filter);
            let expected: Vec<&Entity> = list.iter().filter(|e| e.name.contains(filter)).collect();
            let actual: Vec<&Entity> = editor.entities_filtered().iter().collect();
            assert_eq!(actual, expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_media_actions_clear_saved_and_keep_selection() {
        let (mut editor, _) = fixed_editor(named(&["a"]));
        let entity = editor.entities()[0].clone();
        editor.select_entity(entity.clone());

        let actions: [fn(&mut ProjectEditor); 6] = [
            ProjectEditor::upload_new_tracked_picture,
            ProjectEditor::delete_tracked_picture,
            ProjectEditor::upload_new_picture,
            ProjectEditor::delete_picture,
            ProjectEditor::upload_new_audio,
            ProjectEditor::delete_audio,
        ];

        for action in actions {
            editor.save_entity();
            assert!(editor.saved());
            action(&mut editor);
            assert!(!editor.saved());
            assert_eq!(editor.entity_selected(), Some(&entity));
        }
    }

    #[test]
    fn test_reload_marker_keeps_state() {
        let (mut editor, _) = fixed_editor(named(&["a"]));
        editor.save_entity();
        editor.reload_marker();
        assert!(editor.saved());
    }

    #[test]
    fn test_select_entity_with_picture_switches_to_image_mode() {
        let (mut editor, _) = fixed_editor(Vec::new());
        let entity = Entity::new(1, "pic", "01/01/2024")
            .with_picture(MediaRef::new("https://example.org/a.jpg", 1));

        editor.select_entity(entity);
        assert_eq!(editor.edit_mode(), EditMode::Image);
        assert!(editor.edit_entity_view());
    }

    #[test]
    fn test_select_entity_without_picture_keeps_mode() {
        let (mut editor, _) = fixed_editor(Vec::new());
        let plain = Entity::new(1, "video", "01/01/2024");

        editor.select_entity(plain.clone());
        assert_eq!(editor.edit_mode(), EditMode::Video);

        editor.set_edit_mode(EditMode::Image);
        editor.select_entity(plain);
        assert_eq!(editor.edit_mode(), EditMode::Image);
    }

    #[test]
    fn test_set_edit_mode_clears_saved_on_change() {
        let (mut editor, _) = fixed_editor(Vec::new());
        editor.save_entity();
        editor.set_edit_mode(EditMode::Video);
        assert!(editor.saved());
        editor.set_edit_mode(EditMode::Image);
        assert!(!editor.saved());
    }

    #[test]
    fn test_save_and_exit_edition() {
        let (mut editor, _) = fixed_editor(named(&["a"]));
        editor.select_entity(editor.entities()[0].clone());
        editor.save_entity();
        assert!(editor.saved());

        editor.exit_edition();
        assert!(editor.entity_selected().is_none());
        assert!(!editor.saved());
        assert!(!editor.edit_entity_view());
    }

    #[test]
    fn test_rename_project() {
        let (mut editor, updator) = fixed_editor(Vec::new());
        editor.show_rename_project();

        editor.rename_project("Louvre_2024").unwrap();
        assert_eq!(editor.project().name, "Louvre_2024");
        assert!(!editor.rename_view());
        assert_eq!(updator.take_pending(), 1);
    }

    #[test]
    fn test_rename_rejects_invalid_name() {
        let (mut editor, updator) = fixed_editor(Vec::new());
        editor.show_rename_project();

        let err = editor.rename_project("bad name!").unwrap_err();
        assert!(matches!(err, EditorError::InvalidName(_)));
        assert_eq!(editor.project().name, "Museum");
        assert!(editor.rename_view());
        assert_eq!(updator.take_pending(), 0);
    }

    #[test]
    fn test_rename_requires_project() {
        let (mut editor, _) = placeholder_editor();
        let err = editor.rename_project("name").unwrap_err();
        assert!(matches!(err, EditorError::NoProjectSelected));
    }

    #[test]
    fn test_delete_project_returns_to_sentinel() {
        let (mut editor, updator) = fixed_editor(named(&["a", "b"]));
        editor.delete_project().unwrap();

        assert!(editor.project().is_unselected());
        assert_eq!(updator.take_pending(), 1);

        let err = editor.delete_project().unwrap_err();
        assert!(matches!(err, EditorError::NoProjectSelected));
        assert_eq!(updator.take_pending(), 0);
    }

    #[test]
    fn test_delete_project_clears_placeholder_entities() {
        let (mut editor, _) = placeholder_editor();
        editor.on_project_selected(Project::new(4, "p", "01/01/2024"));
        editor.delete_project().unwrap();
        assert!(editor.entities().is_empty());
        assert!(editor.entities_filtered().is_empty());
    }

    #[test]
    fn test_create_new_entity() {
        let (mut editor, _) = fixed_editor(named(&["a"]));
        editor.show_new_entity();

        assert!(editor.create_new_entity("with space").is_err());
        assert!(editor.new_entity_view());

        editor.create_new_entity("Fountain-01").unwrap();
        assert!(!editor.new_entity_view());
        assert_eq!(editor.entities().len(), 1);
    }

    #[test]
    fn test_source_failure_is_reported() {
        let mut editor = ProjectEditor::new(Box::new(FailingSource), Box::new(UpdatorService::new()));
        editor.on_project_selected(Project::new(3, "p", "01/01/2024"));

        assert!(editor.entities().is_empty());
        assert!(editor.last_error().unwrap().contains("backend unreachable"));

        editor.dismiss_error();
        assert!(editor.last_error().is_none());
    }

    #[test]
    fn test_panel_flags_are_independent() {
        let (mut editor, _) = fixed_editor(Vec::new());
        editor.show_rename_project();
        editor.show_new_entity();
        assert!(editor.rename_view() && editor.new_entity_view());
        assert!(!editor.edit_entity_view());

        editor.hide_rename_project();
        assert!(!editor.rename_view());
        assert!(editor.new_entity_view());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Project-1_final.v2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("Entité").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("two words").is_err());
    }
}
