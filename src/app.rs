use std::time::Duration;

use eframe::egui;

use crate::config::Config;
use crate::state::{AppState, ViewMode};
use crate::ui::{cards, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FolioDashApp {
    pub state: AppState,
}

impl FolioDashApp {
    pub fn new(config: Config) -> Self {
        let mut state = AppState::new(config);
        state.request_refresh();
        Self { state }
    }
}

impl eframe::App for FolioDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Refresh cycle: drain finished fetches, re-arm the timer ----
        self.state.poll_fetch();
        if self.state.refresh_due() {
            self.state.request_refresh();
        }
        // Keep ticking so the timer fires without user input.
        ctx.request_repaint_after(Duration::from_secs(1));

        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: settings ----
        egui::SidePanel::left("settings_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: cards or table ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            ViewMode::Cards => cards::card_grid(ui, &self.state),
            ViewMode::Table => table::portfolio_table(ui, &self.state),
        });
    }
}
