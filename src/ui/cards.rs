use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::view::AssetCard;

const CARD_WIDTH: f32 = 210.0;

// ---------------------------------------------------------------------------
// Asset card grid (central panel)
// ---------------------------------------------------------------------------

/// Render the portfolio as a wrapping grid of asset cards.
pub fn card_grid(ui: &mut Ui, state: &AppState) {
    if state.snapshot.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            let text = match &state.status_message {
                Some(msg) => msg.clone(),
                None => "Loading portfolio…".to_string(),
            };
            ui.heading(text);
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for card in &state.cards {
                    asset_card(ui, state, card);
                }
            });
        });
}

/// One card: name header plus labeled data points.
fn asset_card(ui: &mut Ui, state: &AppState, card: &AssetCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui: &mut Ui| {
                ui.strong(&card.name);
                ui.separator();

                let risk_color = card
                    .risk_bucket
                    .map(|b| state.colors.color_for(Some(b)));
                data_point(ui, "Risk Level", card.risk.as_deref(), risk_color);
                data_point(ui, "Current Price", card.price_raw.as_deref(), None);

                // Upside and X's only exist when price and target are usable.
                if let Some(upside) = &card.upside {
                    data_point(ui, "Potential Upside", Some(upside), None);
                }
                if let Some(multiple) = &card.multiple {
                    data_point(ui, "X's", Some(multiple), None);
                }
            });
        });
}

/// Label on the left, value (or "N/A") right-aligned, optionally coloured.
fn data_point(ui: &mut Ui, label: &str, value: Option<&str>, color: Option<Color32>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new(label).weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            let shown = value.filter(|v| !v.is_empty()).unwrap_or("N/A");
            let mut text = RichText::new(shown);
            if let Some(c) = color {
                text = text.color(c).strong();
            }
            ui.label(text);
        });
    });
}
