// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Multimedia resource records.
//!
//! A resource is what the backend stores for an entity: a tracked
//! thumbnail plus video, image and audio assets. Every slot carries an
//! asset id and a payload which may be missing independently of each other.

use serde::{Deserialize, Serialize};

/// Kind of media slot on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Thumbnail,
    Video,
    Image,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Thumbnail,
        MediaKind::Video,
        MediaKind::Image,
        MediaKind::Audio,
    ];
}

/// One media slot of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSlot {
    pub asset_id: Option<String>,
    /// URL (video) or base64 blob (thumbnail, image, audio)
    pub payload: Option<String>,
    pub size: u64,
}

impl MediaSlot {
    pub fn new(asset_id: Option<String>, payload: Option<String>, size: u64) -> Self {
        Self {
            asset_id,
            payload,
            size,
        }
    }

    /// A slot with no asset attached.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A media-bearing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub access_count: u64,
    pub name: String,
    pub created_on: String,
    pub thumbnail: MediaSlot,
    pub video: MediaSlot,
    pub image: MediaSlot,
    pub audio: MediaSlot,
    pub markers_size: u64,
}

impl Resource {
    /// Create a resource from all of its fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        access_count: u64,
        name: impl Into<String>,
        created_on: impl Into<String>,
        thumbnail: MediaSlot,
        video: MediaSlot,
        image: MediaSlot,
        audio: MediaSlot,
        markers_size: u64,
    ) -> Self {
        Self {
            id: id.into(),
            access_count,
            name: name.into(),
            created_on: created_on.into(),
            thumbnail,
            video,
            image,
            audio,
            markers_size,
        }
    }

    /// Borrow the slot for the given media kind.
    pub fn slot(&self, kind: MediaKind) -> &MediaSlot {
        match kind {
            MediaKind::Thumbnail => &self.thumbnail,
            MediaKind::Video => &self.video,
            MediaKind::Image => &self.image,
            MediaKind::Audio => &self.audio,
        }
    }

    /// Whether the slot carries a payload.
    pub fn has(&self, kind: MediaKind) -> bool {
        self.slot(kind).payload.is_some()
    }

    /// Bytes used by every slot plus the marker set.
    pub fn total_size(&self) -> u64 {
        MediaKind::ALL
            .iter()
            .map(|kind| self.slot(*kind).size)
            .fold(self.markers_size, u64::saturating_add)
    }
}
