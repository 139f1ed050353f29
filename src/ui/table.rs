use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{FIELD_NAME, FIELD_PRICE, FIELD_TARGET};
use crate::state::AppState;
use crate::view::AssetCard;

// ---------------------------------------------------------------------------
// Table view (central panel)
// ---------------------------------------------------------------------------

/// Render the portfolio as a table: raw CSV fields plus derived columns,
/// with the price cell coloured by its bucket.
pub fn portfolio_table(ui: &mut Ui, state: &AppState) {
    let Some(snapshot) = &state.snapshot else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Loading portfolio…");
        });
        return;
    };

    let n_fields = snapshot.portfolio.max_fields();
    let derived = ["Risk", "Upside", "X's"];
    let n_columns = n_fields + derived.len();

    // Renderable rows with their assembled view, in input order.
    let rows: Vec<(&crate::data::model::Row, AssetCard)> = snapshot
        .portfolio
        .rows()
        .iter()
        .filter_map(|row| AssetCard::from_row(row, &state.config.thresholds).map(|c| (row, c)))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), n_columns)
        .header(20.0, |mut header| {
            for idx in 0..n_fields {
                header.col(|ui| {
                    ui.strong(field_title(idx));
                });
            }
            for title in derived {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (row, card) in &rows {
                body.row(18.0, |mut table_row| {
                    for idx in 0..n_fields {
                        table_row.col(|ui| {
                            let value = row.field(idx).unwrap_or("N/A");
                            match card.risk_bucket {
                                Some(bucket) if idx == FIELD_PRICE => {
                                    let color = state.colors.color_for(Some(bucket));
                                    ui.label(RichText::new(value).color(color));
                                }
                                _ => {
                                    ui.label(value);
                                }
                            }
                        });
                    }
                    derived_cell(&mut table_row, card.risk.as_deref());
                    derived_cell(&mut table_row, card.upside.as_deref());
                    derived_cell(&mut table_row, card.multiple.as_deref());
                });
            }
        });
}

fn derived_cell(table_row: &mut egui_extras::TableRow<'_, '_>, value: Option<&str>) {
    table_row.col(|ui| {
        ui.label(value.unwrap_or("N/A"));
    });
}

fn field_title(idx: usize) -> String {
    match idx {
        FIELD_NAME => "Asset".to_string(),
        FIELD_PRICE => "Price".to_string(),
        FIELD_TARGET => "Target".to_string(),
        other => format!("Field {}", other + 1),
    }
}
