mod app;
mod classify;
mod color;
mod config;
mod data;
mod metrics;
mod state;
mod ui;
mod view;

use app::FolioDashApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Folio Dash – Portfolio Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(FolioDashApp::new(Config::load())))),
    )
}
