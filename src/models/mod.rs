// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for projects, entities and media resources.

pub mod entity;
pub mod project;
pub mod resource;
