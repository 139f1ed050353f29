use crate::classify::{classify, Bucket, ThresholdMap};
use crate::data::model::Row;
use crate::metrics;

// ---------------------------------------------------------------------------
// AssetCard – the renderable view of one portfolio row
// ---------------------------------------------------------------------------

/// Everything the card/table renderers need for one asset, assembled
/// from a parsed row and the threshold configuration. Pure; the seam
/// between the transform core and egui.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCard {
    pub name: String,
    /// Formatted risk level ("0.500") when it lies in [0, 1].
    pub risk: Option<String>,
    /// Bucket of the current price, colouring the risk data point.
    pub risk_bucket: Option<Bucket>,
    /// Raw current-price field for display ("N/A" handled by renderer).
    pub price_raw: Option<String>,
    /// Formatted potential upside ("38%").
    pub upside: Option<String>,
    /// Formatted multiple ("1.38x").
    pub multiple: Option<String>,
}

impl AssetCard {
    /// Build the card for one row; rows with an empty name are skipped.
    pub fn from_row(row: &Row, thresholds: &ThresholdMap) -> Option<AssetCard> {
        if row.name().is_empty() {
            return None;
        }
        let name = row.name().to_string();
        let price = row.price();
        let target = row.target();

        let pair = thresholds.get(&name).copied().unwrap_or_default();
        let risk = price
            .and_then(|p| metrics::risk_level(p, &pair))
            .map(metrics::format_risk);
        let risk_bucket = row
            .price_raw()
            .and_then(|raw| classify(raw, &name, thresholds));

        let upside = match (price, target) {
            (Some(p), Some(t)) => metrics::upside_percent(p, t).map(metrics::format_upside),
            _ => None,
        };
        let multiple = match (price, target) {
            (Some(p), Some(t)) => metrics::multiple(p, t).map(metrics::format_multiple),
            _ => None,
        };

        Some(AssetCard {
            name,
            risk,
            risk_bucket,
            price_raw: row.price_raw().map(str::to_string),
            upside,
            multiple,
        })
    }
}

/// Assemble cards for every renderable row, preserving input order.
pub fn build_cards(rows: &[Row], thresholds: &ThresholdMap) -> Vec<AssetCard> {
    rows.iter()
        .filter_map(|row| AssetCard::from_row(row, thresholds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ThresholdPair;
    use crate::data::parser::parse_csv;

    fn thresholds() -> ThresholdMap {
        let mut map = ThresholdMap::new();
        map.insert("BTC".to_string(), ThresholdPair::new(10.0, 20.0));
        map
    }

    #[test]
    fn full_card_from_configured_asset() {
        let portfolio = parse_csv("BTC,15,flat,1.2T,30");
        let cards = build_cards(portfolio.rows(), &thresholds());
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.name, "BTC");
        assert_eq!(card.risk.as_deref(), Some("0.500"));
        assert_eq!(card.risk_bucket.unwrap().index(), 5);
        assert_eq!(card.price_raw.as_deref(), Some("15"));
        assert_eq!(card.upside.as_deref(), Some("100%"));
        assert_eq!(card.multiple.as_deref(), Some("2.00x"));
    }

    #[test]
    fn blank_rows_are_skipped() {
        let portfolio = parse_csv("BTC,15\n\nETH,50");
        let cards = build_cards(portfolio.rows(), &thresholds());
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["BTC", "ETH"]);
    }

    #[test]
    fn asset_without_thresholds_has_no_risk() {
        let portfolio = parse_csv("ETH,50,x,x,80");
        let card = &build_cards(portfolio.rows(), &thresholds())[0];
        assert_eq!(card.risk, None);
        assert_eq!(card.risk_bucket, None);
        // Upside and multiple only need price and target.
        assert_eq!(card.upside.as_deref(), Some("60%"));
        assert_eq!(card.multiple.as_deref(), Some("1.60x"));
    }

    #[test]
    fn price_outside_range_keeps_bucket_but_not_risk() {
        let portfolio = parse_csv("BTC,25");
        let card = &build_cards(portfolio.rows(), &thresholds())[0];
        assert_eq!(card.risk, None);
        assert_eq!(card.risk_bucket.unwrap().index(), 10);
    }

    #[test]
    fn short_row_degrades_to_na() {
        let portfolio = parse_csv("GOLD");
        let card = &build_cards(portfolio.rows(), &ThresholdMap::new())[0];
        assert_eq!(card.price_raw, None);
        assert_eq!(card.upside, None);
        assert_eq!(card.multiple, None);
    }
}
