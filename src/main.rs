mod app;
mod data;
mod state;
mod theme;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::ScatterApp;
use data::generator::LinearModel;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let state = AppState::generate(LinearModel::default()).context("generating sample set")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    log::info!("Opening scatter plot window");

    // Blocks until the window is closed.
    eframe::run_native(
        "Linear Scatter",
        options,
        Box::new(|cc| Ok(Box::new(ScatterApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("running native window")
}
