// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Makizart editor binary.

use anyhow::Result;
use makizart_editor::{app::EditorApp, io::config::EditorConfig};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::load()?;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Makizart - Project Editor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Makizart Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
