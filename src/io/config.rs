// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor configuration.
//!
//! Settings are read from a YAML or JSON file. The path comes from the
//! `MAKIZART_EDITOR_CONFIG` environment variable, falling back to
//! `makizart-editor.yaml` in the working directory. Missing files yield the
//! defaults; malformed files are an error.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "MAKIZART_EDITOR_CONFIG";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "makizart-editor.yaml";

/// Sample media used by the placeholder entity source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleMedia {
    pub picture: String,
    pub video: String,
    pub audio: String,
}

impl Default for SampleMedia {
    fn default() -> Self {
        Self {
            picture: "https://cdn.pixabay.com/photo/2023/10/14/23/27/airplane-8315886_1280.jpg"
                .to_string(),
            video: "https://player.vimeo.com/video/879891554?h=fba301cac0".to_string(),
            audio: "https://lasonotheque.org/UPLOAD/mp3/0001.mp3".to_string(),
        }
    }
}

/// Complete editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Number of projects listed by the placeholder source
    pub project_count: u32,
    pub sample_media: SampleMedia,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            project_count: 8,
            sample_media: SampleMedia::default(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from the environment-selected file or the defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    log::info!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a YAML or JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let config = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("Invalid YAML config {}", path.display()))?,
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON config {}", path.display()))?,
            _ => bail!("Unsupported config extension: {:?}", extension),
        };

        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
