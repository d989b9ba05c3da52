// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project entities.
//!
//! An entity is a named item inside a project. It owns up to four media
//! slots: a picture or a video shown when the marker is recognised, an
//! audio track, and the tracked marker image itself.

use serde::{Deserialize, Serialize};

/// Reference to a stored media asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    /// URL or inline base64 payload
    pub location: String,
    /// Size in bytes
    pub size: u64,
}

impl MediaRef {
    pub fn new(location: impl Into<String>, size: u64) -> Self {
        Self {
            location: location.into(),
            size,
        }
    }
}

/// An entity and its media slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: i64,
    pub name: String,
    pub created_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<MediaRef>,
    /// Tracked image used to build the AR marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MediaRef>,
}

impl Entity {
    /// Create an entity without any media.
    pub fn new(id: i64, name: impl Into<String>, created_on: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_on: created_on.into(),
            picture: None,
            video: None,
            audio: None,
            marker: None,
        }
    }

    pub fn with_picture(mut self, picture: MediaRef) -> Self {
        self.picture = Some(picture);
        self
    }

    pub fn with_video(mut self, video: MediaRef) -> Self {
        self.video = Some(video);
        self
    }

    pub fn with_audio(mut self, audio: MediaRef) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_marker(mut self, marker: MediaRef) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Total bytes used by the entity's media.
    pub fn media_size(&self) -> u64 {
        [&self.picture, &self.video, &self.audio, &self.marker]
            .into_iter()
            .flatten()
            .fold(0u64, |acc, media| acc.saturating_add(media.size))
    }
}
