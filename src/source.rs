// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data-fetch interface for projects and their entities.
//!
//! The editor never builds entities itself; it asks an `EntitySource`.
//! `PlaceholderSource` stands in until a backend is wired up and produces
//! development data sized after the project id.

use crate::io::config::{EditorConfig, SampleMedia};
use crate::models::{
    entity::{Entity, MediaRef},
    project::Project,
};
use crate::util::format;
use anyhow::Result;
use rand::Rng;

/// Where projects and entities come from.
pub trait EntitySource {
    /// All projects the user can pick from.
    fn projects(&self) -> Result<Vec<Project>>;

    /// Entities belonging to `project`.
    fn entities(&self, project: &Project) -> Result<Vec<Entity>>;
}

/// Development source generating fake projects and entities.
#[derive(Debug, Clone)]
pub struct PlaceholderSource {
    project_count: u32,
    media: SampleMedia,
}

impl PlaceholderSource {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            project_count: config.project_count,
            media: config.sample_media.clone(),
        }
    }
}

impl EntitySource for PlaceholderSource {
    fn projects(&self) -> Result<Vec<Project>> {
        let created_on = format::today();
        Ok((1..=i64::from(self.project_count))
            .map(|id| Project::new(id, format!("Project {}", id), created_on.clone()))
            .collect())
    }

    fn entities(&self, project: &Project) -> Result<Vec<Entity>> {
        let mut rng = rand::thread_rng();
        let created_on = format::today();
        let count = project.id.max(0);

        let entities = (0..count)
            .map(|i| {
                Entity::new(i, format!("Entity {}", i), created_on.clone())
                    .with_picture(MediaRef::new(&self.media.picture, rng.gen_range(0..100)))
                    .with_video(MediaRef::new(&self.media.video, rng.gen_range(0..100)))
                    .with_audio(MediaRef::new(&self.media.audio, rng.gen_range(0..100)))
            })
            .collect();

        log::debug!("Generated {} placeholder entities for project {}", count, project.id);
        Ok(entities)
    }
}
