use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Bucket – one of ten ordered visual grades
// ---------------------------------------------------------------------------

pub const BUCKET_COUNT: u8 = 10;

/// One of ten ordered visual buckets, 1 (lowest) to 10 (highest).
/// The bucket index selects a gradient color in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bucket(u8);

impl Bucket {
    /// Wrap a 1-based index, clamped into `1..=10`.
    fn clamped(index: u8) -> Self {
        Bucket(index.clamp(1, BUCKET_COUNT))
    }

    /// 1-based index of this bucket.
    pub fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gradient-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// ThresholdPair – per-asset classification bounds
// ---------------------------------------------------------------------------

/// The (low, high) bounds defining an asset's classification range.
/// Either bound may be missing independently; classification is defined
/// only when both are present and `high > low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdPair {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl ThresholdPair {
    pub fn new(low: f64, high: f64) -> Self {
        ThresholdPair {
            low: Some(low),
            high: Some(high),
        }
    }

    /// The usable `(low, high)` range, or `None` when a bound is missing
    /// or the range is inverted/empty (`high <= low`). The latter guard
    /// also protects the divide in [`relative_bucket`].
    pub fn range(&self) -> Option<(f64, f64)> {
        match (self.low, self.high) {
            (Some(low), Some(high)) if high > low => Some((low, high)),
            _ => None,
        }
    }
}

/// Per-asset threshold configuration, keyed by asset name.
pub type ThresholdMap = BTreeMap<String, ThresholdPair>;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a raw field for the named asset.
///
/// Strategy is selected by whether per-asset thresholds are configured:
/// an empty map means fixed absolute bands apply to every asset, a
/// non-empty map means threshold-relative grading (assets without an
/// entry stay unclassified).
pub fn classify(raw: &str, asset: &str, thresholds: &ThresholdMap) -> Option<Bucket> {
    let value: f64 = raw.trim().parse().ok()?;
    // Rust accepts "NaN"/"inf" spellings; neither can be ordered against
    // the bounds or bands, so they stay unclassified.
    if !value.is_finite() {
        return None;
    }
    if thresholds.is_empty() {
        Some(band_bucket(value))
    } else {
        let (low, high) = thresholds.get(asset)?.range()?;
        Some(relative_bucket(value, low, high))
    }
}

/// Threshold-relative grading over `(low, high)`, `high > low`.
///
/// Values at or below `low` take bucket 1, at or above `high` bucket 10.
/// In between, `ceil(percentage * 8) + 1` yields a bucket in `[2, 9]`.
/// The `ceil` (not `round`) is load-bearing: values just above `low`
/// land in bucket 2, keeping the mapping monotone but biased upward near
/// bucket boundaries, and downstream consumers depend on that exact
/// rounding.
pub fn relative_bucket(value: f64, low: f64, high: f64) -> Bucket {
    if value <= low {
        return Bucket(1);
    }
    if value >= high {
        return Bucket(BUCKET_COUNT);
    }
    let percentage = (value - low) / (high - low);
    Bucket::clamped((percentage * 8.0).ceil() as u8 + 1)
}

/// Fixed absolute bands used when no thresholds are configured.
pub fn band_bucket(value: f64) -> Bucket {
    let index = match value {
        v if v < 0.0 => 1,
        v if v < 1.0 => 2,
        v if v < 10.0 => 3,
        v if v < 50.0 => 4,
        v if v < 100.0 => 5,
        v if v < 500.0 => 6,
        v if v < 1000.0 => 7,
        v if v < 10_000.0 => 8,
        v if v < 50_000.0 => 9,
        _ => 10,
    };
    Bucket(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_asset(low: f64, high: f64) -> ThresholdMap {
        let mut map = ThresholdMap::new();
        map.insert("BTC".to_string(), ThresholdPair::new(low, high));
        map
    }

    #[test]
    fn endpoints_pin_to_first_and_last_bucket() {
        let map = one_asset(10.0, 20.0);
        assert_eq!(classify("10", "BTC", &map).unwrap().index(), 1);
        assert_eq!(classify("9", "BTC", &map).unwrap().index(), 1);
        assert_eq!(classify("20", "BTC", &map).unwrap().index(), 10);
        assert_eq!(classify("25", "BTC", &map).unwrap().index(), 10);
    }

    #[test]
    fn midpoint_maps_to_bucket_five() {
        // percentage 0.5 → ceil(4) + 1 = 5
        let map = one_asset(10.0, 20.0);
        assert_eq!(classify("15", "BTC", &map).unwrap().index(), 5);
    }

    #[test]
    fn just_above_low_rounds_up_to_bucket_two() {
        // percentage ≈ 0.001 → ceil(0.008) + 1 = 2, not 1
        let map = one_asset(10.0, 20.0);
        assert_eq!(classify("10.01", "BTC", &map).unwrap().index(), 2);
    }

    #[test]
    fn output_is_monotone_in_the_value() {
        let map = one_asset(0.0, 100.0);
        let mut previous = 0;
        for step in 0..=1000 {
            let value = step as f64 / 10.0;
            let bucket = classify(&value.to_string(), "BTC", &map).unwrap().index();
            assert!(bucket >= previous, "bucket dropped at value {value}");
            previous = bucket;
        }
    }

    #[test]
    fn inverted_or_degenerate_range_is_unclassified() {
        assert_eq!(classify("15", "BTC", &one_asset(20.0, 10.0)), None);
        assert_eq!(classify("15", "BTC", &one_asset(10.0, 10.0)), None);
    }

    #[test]
    fn missing_bound_is_unclassified() {
        let mut map = ThresholdMap::new();
        map.insert(
            "BTC".to_string(),
            ThresholdPair {
                low: Some(10.0),
                high: None,
            },
        );
        assert_eq!(classify("15", "BTC", &map), None);
    }

    #[test]
    fn unknown_asset_is_unclassified_when_thresholds_exist() {
        let map = one_asset(10.0, 20.0);
        assert_eq!(classify("15", "ETH", &map), None);
    }

    #[test]
    fn non_numeric_value_is_unclassified() {
        let map = one_asset(10.0, 20.0);
        assert_eq!(classify("n/a", "BTC", &map), None);
        assert_eq!(classify("", "BTC", &map), None);
    }

    #[test]
    fn non_finite_value_is_unclassified_in_both_modes() {
        // These spellings parse as f64 but cannot be graded; without the
        // finite guard NaN would fall through to bucket 1 (threshold
        // mode) or bucket 10 (band mode).
        let map = one_asset(10.0, 20.0);
        let bands = ThresholdMap::new();
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "-Infinity"] {
            assert_eq!(classify(raw, "BTC", &map), None, "threshold mode: {raw}");
            assert_eq!(classify(raw, "BTC", &bands), None, "band mode: {raw}");
        }
    }

    #[test]
    fn empty_threshold_map_falls_back_to_fixed_bands() {
        let map = ThresholdMap::new();
        assert_eq!(classify("-3", "X", &map).unwrap().index(), 1);
        assert_eq!(classify("0.5", "X", &map).unwrap().index(), 2);
        assert_eq!(classify("5", "X", &map).unwrap().index(), 3);
        assert_eq!(classify("25", "X", &map).unwrap().index(), 4);
        assert_eq!(classify("75", "X", &map).unwrap().index(), 5);
        assert_eq!(classify("250", "X", &map).unwrap().index(), 6);
        assert_eq!(classify("750", "X", &map).unwrap().index(), 7);
        assert_eq!(classify("5000", "X", &map).unwrap().index(), 8);
        assert_eq!(classify("25000", "X", &map).unwrap().index(), 9);
        assert_eq!(classify("50000", "X", &map).unwrap().index(), 10);
    }

    #[test]
    fn bucket_displays_as_gradient_class() {
        let map = one_asset(10.0, 20.0);
        let bucket = classify("15", "BTC", &map).unwrap();
        assert_eq!(bucket.to_string(), "gradient-5");
    }
}
