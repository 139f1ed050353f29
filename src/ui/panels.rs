use chrono::Local;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, ViewMode};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Refresh").clicked() {
            state.request_refresh();
        }
        if state.loading {
            ui.spinner();
        }

        ui.separator();

        ui.selectable_value(&mut state.view, ViewMode::Cards, "Cards");
        ui.selectable_value(&mut state.view, ViewMode::Table, "Table");

        ui.separator();

        if let Some(snapshot) = &state.snapshot {
            ui.label(format!(
                "{} rows · updated {}",
                snapshot.portfolio.len(),
                snapshot.fetched_at.format("%H:%M:%S")
            ));
        }

        if let Some(date) = state.config.countdown_date {
            let days = (date - Local::now().date_naive()).num_days();
            ui.separator();
            ui.label(format!("{days} days to {date}"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – settings
// ---------------------------------------------------------------------------

/// Render the settings panel: CSV source, per-asset thresholds, legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- CSV source ----
            ui.strong("CSV source");
            ui.text_edit_singleline(&mut state.draft.csv_url);
            if ui.button("Apply").clicked() {
                state.apply_csv_url();
            }
            ui.separator();

            // ---- Per-asset thresholds ----
            ui.strong("Asset thresholds");
            match state.draft.selected_asset.clone() {
                Some(asset) => asset_editor(ui, state, &asset),
                None => asset_list(ui, state),
            }
            ui.separator();

            // ---- Macro overlay (display only) ----
            if let Some(macro_view) = &state.config.macro_view {
                ui.strong("Macro");
                ui.label(format!("Stance: {}", macro_view.stance));
                ui.label(format!("Policy rate: {:.2}%", macro_view.policy_rate));
                ui.label(format!("Inflation: {:.2}%", macro_view.inflation_rate));
                ui.separator();
            }

            // ---- Gradient legend ----
            ui.strong("Legend");
            for (label, color) in state.colors.legend_entries() {
                ui.label(RichText::new(label).color(color));
            }
        });
}

/// One button per asset in the current snapshot; clicking opens its editor.
fn asset_list(ui: &mut Ui, state: &mut AppState) {
    if state.cards.is_empty() {
        ui.label("No data loaded yet.");
        return;
    }
    let names: Vec<String> = state.cards.iter().map(|c| c.name.clone()).collect();
    for name in names {
        let configured = state.config.thresholds.contains_key(&name);
        let label = if configured {
            format!("{name} ●")
        } else {
            name.clone()
        };
        if ui.button(label).clicked() {
            state.open_asset_editor(&name);
        }
    }
}

/// Low/high editor for one asset.
fn asset_editor(ui: &mut Ui, state: &mut AppState, asset: &str) {
    ui.label(format!("Settings for {asset}"));

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Low");
        ui.text_edit_singleline(&mut state.draft.low);
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label("High");
        ui.text_edit_singleline(&mut state.draft.high);
    });

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Save").clicked() {
            state.apply_thresholds();
        }
        if ui.button("Back").clicked() {
            state.draft.selected_asset = None;
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick a local CSV; the chosen path becomes the configured source.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open portfolio CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.draft.csv_url = path.display().to_string();
        state.apply_csv_url();
    }
}
