use crate::classify::ThresholdPair;

// ---------------------------------------------------------------------------
// Derived per-asset metrics
// ---------------------------------------------------------------------------
//
// Pure numeric derivations from the current price, the asset's threshold
// pair and the target price. Every precondition failure yields `None`
// (the renderer shows "N/A" or omits the data point), never an error.

/// Normalized position of `price` within the threshold range, in [0, 1].
/// `None` when the pair is unusable or the price sits outside the range.
pub fn risk_level(price: f64, pair: &ThresholdPair) -> Option<f64> {
    let (low, high) = pair.range()?;
    let level = (price - low) / (high - low);
    (0.0..=1.0).contains(&level).then_some(level)
}

/// Percent upside from `price` to `target`: `((target / price) - 1) * 100`.
/// Requires a strictly positive price, which also rules out NaN.
pub fn upside_percent(price: f64, target: f64) -> Option<f64> {
    (price > 0.0 && target.is_finite()).then(|| ((target / price) - 1.0) * 100.0)
}

/// Multiple from `price` to `target` ("X's"), same preconditions as upside.
pub fn multiple(price: f64, target: f64) -> Option<f64> {
    (price > 0.0 && target.is_finite()).then(|| target / price)
}

// -- Display formatting --

/// Risk level shown with 3 decimals, e.g. `0.500`.
pub fn format_risk(level: f64) -> String {
    format!("{level:.3}")
}

/// Upside shown as an integer percentage, e.g. `38%`.
pub fn format_upside(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// Multiple shown with 2 decimals and an `x` suffix, e.g. `1.38x`.
pub fn format_multiple(multiple: f64) -> String {
    format!("{multiple:.2}x")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn risk_level_is_normalized_position() {
        let pair = ThresholdPair::new(10.0, 20.0);
        assert_relative_eq!(risk_level(15.0, &pair).unwrap(), 0.5);
        assert_relative_eq!(risk_level(10.0, &pair).unwrap(), 0.0);
        assert_relative_eq!(risk_level(20.0, &pair).unwrap(), 1.0);
    }

    #[test]
    fn risk_level_outside_range_is_unavailable() {
        let pair = ThresholdPair::new(10.0, 20.0);
        assert_eq!(risk_level(9.0, &pair), None);
        assert_eq!(risk_level(21.0, &pair), None);
    }

    #[test]
    fn risk_level_requires_valid_pair() {
        assert_eq!(risk_level(15.0, &ThresholdPair::new(20.0, 10.0)), None);
        assert_eq!(risk_level(15.0, &ThresholdPair::default()), None);
    }

    #[test]
    fn zero_price_guards_both_ratios() {
        assert_eq!(upside_percent(0.0, 100.0), None);
        assert_eq!(multiple(0.0, 100.0), None);
    }

    #[test]
    fn negative_price_is_also_rejected() {
        assert_eq!(upside_percent(-5.0, 100.0), None);
        assert_eq!(multiple(-5.0, 100.0), None);
    }

    #[test]
    fn upside_and_multiple_values() {
        assert_relative_eq!(upside_percent(65.0, 90.0).unwrap(), 38.46, epsilon = 0.01);
        assert_relative_eq!(multiple(65.0, 90.0).unwrap(), 1.3846, epsilon = 0.001);
    }

    #[test]
    fn display_formats() {
        assert_eq!(format_risk(0.5), "0.500");
        assert_eq!(format_upside(38.46), "38%");
        assert_eq!(format_multiple(1.3846), "1.38x");
    }
}
