mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::AirportExplorerApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::from_args();
    log::info!("Starting with {config:?}");

    // Loaded exactly once; the app owns the table from here on.
    let outcome = data::loader::load_or_empty(&config.data_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Airport Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(AirportExplorerApp::new(&config, outcome)))),
    )
}
