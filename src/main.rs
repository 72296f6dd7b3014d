//! Readlet - lightweight desktop e-reader
//!
//! A reading-focused shell with a library browser, typography and theme
//! controls, and a notes/bookmarks manager.

mod app;
mod core;
mod ui;

use app::ReadletApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Readlet...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([480.0, 600.0])
            .with_title("Readlet"),
        ..Default::default()
    };

    eframe::run_native(
        "Readlet",
        native_options,
        Box::new(|cc| Ok(Box::new(ReadletApp::new(cc)))),
    )
}
