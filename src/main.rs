mod app;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::HospitalFinderApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // No dataset, no app: a bad file aborts startup.
    let source = PathBuf::from(config::DATA_PATH);
    let dataset = data::load_dataset(&source)
        .with_context(|| format!("loading hospital data from {}", source.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(HospitalFinderApp::new(dataset, source)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {e}"))
}
