// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Errors reported by the project editor.

/// Reasons an editor action can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Invalid name '{0}': only letters, digits, '-', '_' and '.' are allowed")]
    InvalidName(String),

    #[error("No project selected")]
    NoProjectSelected,

    #[error("Failed to fetch data: {0}")]
    Source(#[from] anyhow::Error),
}
