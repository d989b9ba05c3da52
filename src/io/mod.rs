// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for configuration files and media payloads.

pub mod config;
pub mod media;
