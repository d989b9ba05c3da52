// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the project editor.

pub mod dialogs;
pub mod entity_editor;
pub mod entity_list;
pub mod project_list;
