// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;

mod analysis;
mod app;
mod config;
mod decode;
mod meal;
mod state;
mod ui;

use app::TrackerApp;
use config::TrackerConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tracker_config = TrackerConfig::load_or_default().context("Failed to load config")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_title("AI Protein Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "AI Protein Tracker",
        options,
        Box::new(move |_cc| Box::new(TrackerApp::new(tracker_config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
