// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records.
//!
//! A project is the top-level container a user selects before its
//! entities become visible in the editor.

use serde::{Deserialize, Serialize};

/// Id carried by the "no project selected" sentinel.
pub const UNSELECTED_ID: i64 = -1;

/// A project as listed in the project panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub created_on: String,
}

impl Project {
    /// Create a new project record.
    pub fn new(id: i64, name: impl Into<String>, created_on: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            created_on: created_on.into(),
        }
    }

    /// The sentinel shown while no project is selected.
    pub fn unselected() -> Self {
        Self::new(UNSELECTED_ID, "Select a project ...", "DD/MM/YY")
    }

    /// Whether this is the "no project selected" sentinel.
    pub fn is_unselected(&self) -> bool {
        self.id == UNSELECTED_ID
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::unselected()
    }
}
