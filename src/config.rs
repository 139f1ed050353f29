use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::ThresholdMap;

// ---------------------------------------------------------------------------
// Persisted settings
// ---------------------------------------------------------------------------

pub const DEFAULT_CSV_URL: &str = "dummy_data.csv";
pub const DEFAULT_REFRESH_MINUTES: u64 = 5;

/// User settings, persisted as JSON in the platform config directory.
/// Unknown or missing keys fall back to defaults so old settings files
/// keep loading after upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV source: an http(s) URL or a local file path.
    pub csv_url: String,
    /// Refresh cadence in minutes.
    pub refresh_minutes: u64,
    /// Per-asset threshold pairs, keyed by asset name.
    pub thresholds: ThresholdMap,
    /// Optional macro overlay; displayed only, never used in classification.
    pub macro_view: Option<MacroView>,
    /// Optional date for the days-remaining countdown in the top bar.
    pub countdown_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_url: DEFAULT_CSV_URL.to_string(),
            refresh_minutes: DEFAULT_REFRESH_MINUTES,
            thresholds: ThresholdMap::new(),
            macro_view: None,
            countdown_date: None,
        }
    }
}

/// Macro context overlay: a categorical stance plus two rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroView {
    pub stance: String,
    pub policy_rate: f64,
    pub inflation_rate: f64,
}

impl Default for MacroView {
    fn default() -> Self {
        MacroView {
            stance: "Neutral".to_string(),
            policy_rate: 0.0,
            inflation_rate: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Load / save
// ---------------------------------------------------------------------------

/// `<platform config dir>/folio-dash/settings.json`; falls back to the
/// working directory when no config dir exists (e.g. stripped containers).
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio-dash")
        .join("settings.json")
}

impl Config {
    /// Load settings from the default location.
    pub fn load() -> Config {
        Config::load_from(&settings_path())
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// is missing or unusable. A missing file is the normal first-run
    /// case; anything else (corrupt JSON, permission errors) is logged
    /// and ignored rather than blocking startup.
    pub fn load_from(path: &Path) -> Config {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring corrupt settings file {}: {e}", path.display());
                    Config::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Config::default(),
            Err(e) => {
                log::warn!("Could not read settings file {}: {e}", path.display());
                Config::default()
            }
        }
    }

    /// Persist settings to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path())
    }

    /// Persist settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ThresholdPair;

    #[test]
    fn default_settings() {
        let config = Config::default();
        assert_eq!(config.csv_url, "dummy_data.csv");
        assert_eq!(config.refresh_minutes, 5);
        assert!(config.thresholds.is_empty());
    }

    #[test]
    fn json_round_trip() {
        let mut config = Config::default();
        config.csv_url = "https://example.com/portfolio.csv".to_string();
        config
            .thresholds
            .insert("BTC".to_string(), ThresholdPair::new(10.0, 20.0));
        config.macro_view = Some(MacroView {
            stance: "Hawkish".to_string(),
            policy_rate: 5.25,
            inflation_rate: 3.1,
        });

        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("folio-dash-test-missing-settings.json");
        let _ = fs::remove_file(&path);
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let path = std::env::temp_dir().join("folio-dash-test-corrupt-settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_and_load_round_trip_on_disk() {
        let path = std::env::temp_dir().join("folio-dash-test-settings-roundtrip.json");
        let mut config = Config::default();
        config
            .thresholds
            .insert("BTC".to_string(), ThresholdPair::new(10.0, 20.0));
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn partial_threshold_entry_deserializes() {
        let config: Config =
            serde_json::from_str(r#"{"thresholds":{"BTC":{"low":10.0}}}"#).unwrap();
        let pair = config.thresholds["BTC"];
        assert_eq!(pair.low, Some(10.0));
        assert_eq!(pair.high, None);
        assert_eq!(pair.range(), None);
    }
}
