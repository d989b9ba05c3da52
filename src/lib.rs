// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Makizart project editor.
//!
//! Desktop editor for AR projects: pick a project, browse and filter its
//! entities, and manage the media attached to each entity (picture, video,
//! audio and the tracked marker image).

pub mod app;
pub mod editor;
pub mod error;
pub mod io;
pub mod models;
pub mod selection;
pub mod source;
pub mod ui;
pub mod util;
