// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media payload decoding.
//!
//! Pictures, thumbnails and audio travel either as remote URLs or as base64
//! blobs (optionally wrapped in a `data:` URL). This module decodes inline
//! payloads and turns pictures into RGBA pixels suitable for egui textures.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A decoded image ready for upload as a texture.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major
    pub pixels: Vec<u8>,
}

/// Whether a media location points to a remote resource.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Decode a raw base64 payload or a `data:<mime>;base64,<data>` URL.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let data = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest
                .split_once(',')
                .context("Malformed data URL: missing ','")?;
            if !header.ends_with(";base64") {
                anyhow::bail!("Unsupported data URL encoding: {}", header);
            }
            data
        }
        None => payload,
    };

    STANDARD
        .decode(data.trim())
        .context("Payload is not valid base64")
}

/// Decode an inline picture payload into RGBA pixels.
pub fn load_image_payload(payload: &str) -> Result<LoadedImage> {
    let bytes = decode_payload(payload)?;
    let img = image::load_from_memory(&bytes).context("Failed to decode image payload")?;
    let rgba = img.to_rgba8();

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
