// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Entity edit panel.
//!
//! Shows the media slots of the selected entity and the upload/delete
//! controls for each. The user chooses between a video block and an image
//! block; audio and the tracked marker image are always shown.

use crate::editor::EditMode;
use crate::io::media;
use crate::models::entity::{Entity, MediaRef};
use crate::util::format;

/// Result of edit panel interaction.
pub enum EntityEditorAction {
    None,
    SetMode(EditMode),
    UploadTrackedPicture,
    DeleteTrackedPicture,
    UploadPicture,
    DeletePicture,
    UploadAudio,
    DeleteAudio,
    Save,
    Exit,
}

/// Display the edit panel for `entity`.
pub fn show(
    ui: &mut egui::Ui,
    entity: &Entity,
    mode: EditMode,
    saved: bool,
    picture_texture: Option<&egui::TextureHandle>,
) -> EntityEditorAction {
    let mut action = EntityEditorAction::None;

    ui.heading(&entity.name);
    ui.label(egui::RichText::new(format!("created {}", entity.created_on)).weak());
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(egui::RichText::new("Tracked image").strong());
        media_row(ui, entity.marker.as_ref(), &mut action, |upload| {
            if upload {
                EntityEditorAction::UploadTrackedPicture
            } else {
                EntityEditorAction::DeleteTrackedPicture
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            if ui.selectable_label(mode == EditMode::Video, "🎞 Video").clicked() {
                action = EntityEditorAction::SetMode(EditMode::Video);
            }
            if ui.selectable_label(mode == EditMode::Image, "🖼 Image").clicked() {
                action = EntityEditorAction::SetMode(EditMode::Image);
            }
        });

        match mode {
            EditMode::Video => match &entity.video {
                Some(video) => {
                    ui.hyperlink_to(&video.location, &video.location);
                    ui.label(format::format_size(video.size));
                }
                None => {
                    ui.label(egui::RichText::new("No video").weak());
                }
            },
            EditMode::Image => {
                if let Some(texture) = picture_texture {
                    let width = ui.available_width().min(320.0);
                    ui.add(egui::Image::from_texture(texture).max_width(width));
                }
                media_row(ui, entity.picture.as_ref(), &mut action, |upload| {
                    if upload {
                        EntityEditorAction::UploadPicture
                    } else {
                        EntityEditorAction::DeletePicture
                    }
                });
            }
        }
        ui.separator();

        ui.label(egui::RichText::new("Audio").strong());
        media_row(ui, entity.audio.as_ref(), &mut action, |upload| {
            if upload {
                EntityEditorAction::UploadAudio
            } else {
                EntityEditorAction::DeleteAudio
            }
        });
        ui.separator();

        ui.horizontal(|ui| {
            // Red save button while there are unsaved changes
            let save = if saved {
                egui::Button::new("💾 Saved")
            } else {
                egui::Button::new(egui::RichText::new("💾 Save").color(egui::Color32::WHITE))
                    .fill(egui::Color32::from_rgb(180, 40, 40))
            };
            if ui.add(save).clicked() {
                action = EntityEditorAction::Save;
            }
            if ui.button("✖ Close").clicked() {
                action = EntityEditorAction::Exit;
            }
        });
    });

    action
}

/// One media slot: its location and size, plus upload/delete buttons.
fn media_row(
    ui: &mut egui::Ui,
    media: Option<&MediaRef>,
    action: &mut EntityEditorAction,
    make: impl Fn(bool) -> EntityEditorAction,
) {
    ui.horizontal(|ui| {
        match media {
            Some(media_ref) if media::is_remote(&media_ref.location) => {
                ui.hyperlink_to("open", &media_ref.location);
                ui.label(format::format_size(media_ref.size));
            }
            Some(media_ref) => {
                ui.label("inline");
                ui.label(format::format_size(media_ref.size));
            }
            None => {
                ui.label(egui::RichText::new("none").weak());
            }
        }

        if ui.button("⬆ Upload").clicked() {
            *action = make(true);
        }
        if ui
            .add_enabled(media.is_some(), egui::Button::new("🗑 Delete"))
            .clicked()
        {
            *action = make(false);
        }
    });
}
