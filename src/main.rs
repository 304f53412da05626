// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod state;
mod ui;

use app::FeynmanApp;
use crate::config::Settings;

fn main() -> Result<()> {
    let loaded = Settings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&settings);
    if let Err(e) = &loaded {
        warn!("Using default settings: {}", e);
    }
    info!(?settings, "starting Feynman Learning Assistant");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Feynman Learning Assistant"),
        ..Default::default()
    };

    let dark_mode = settings.dark_mode;
    eframe::run_native(
        "Feynman Learning Assistant",
        options,
        Box::new(move |cc| {
            let visuals = if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };
            cc.egui_ctx.set_visuals(visuals);
            Box::new(FeynmanApp::new())
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

// RUST_LOG takes precedence over the configured filter
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
