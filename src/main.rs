//! IMDB Movie Explorer - Movie Data Analysis & Interactive Filter Viewer
//!
//! A Rust application that loads the IMDB movie dataset, cleans it and
//! lets the user filter it by genre, certificate and rating range.

mod data;
mod gui;

use eframe::egui;
use gui::MovieExplorerApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("IMDB Movie Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "IMDB Movie Explorer",
        options,
        Box::new(|cc| Ok(Box::new(MovieExplorerApp::new(cc)))),
    )
}
