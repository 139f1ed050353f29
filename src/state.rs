use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::color::BucketColors;
use crate::config::{self, Config};
use crate::data::fetch::{spawn_fetch, FetchOutcome, Source};
use crate::data::model::Portfolio;
use crate::view::{build_cards, AssetCard};

// ---------------------------------------------------------------------------
// Snapshot – one completed refresh cycle
// ---------------------------------------------------------------------------

/// The result of one refresh: an immutable portfolio plus bookkeeping.
/// Each refresh replaces the previous snapshot wholesale.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub portfolio: Portfolio,
    pub generation: u64,
    pub fetched_at: DateTime<Local>,
}

/// How the central panel renders the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Cards,
    Table,
}

// ---------------------------------------------------------------------------
// Settings draft – text buffers behind the settings panel
// ---------------------------------------------------------------------------

/// Edit buffers for the settings panel. Committed values live in
/// [`Config`]; these hold in-progress text so typing never mutates the
/// persisted state.
#[derive(Debug, Clone, Default)]
pub struct SettingsDraft {
    pub csv_url: String,
    /// Asset currently open in the threshold editor.
    pub selected_asset: Option<String>,
    pub low: String,
    pub high: String,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Latest applied snapshot (None until the first fetch completes).
    pub snapshot: Option<Snapshot>,

    /// Renderable cards derived from the snapshot + thresholds (cached).
    pub cards: Vec<AssetCard>,

    /// Bucket → colour mapping for the gradient ramp.
    pub colors: BucketColors,

    pub view: ViewMode,
    pub draft: SettingsDraft,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a fetch is in flight.
    pub loading: bool,

    /// Where settings are persisted; injectable so tests never touch the
    /// user's real settings file.
    pub settings_path: PathBuf,

    /// Monotonic counter handed to fetch requests; outcomes carrying an
    /// older generation than the applied snapshot are discarded.
    next_generation: u64,
    last_issued: u64,
    last_request_at: Option<Instant>,

    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = channel();
        let draft = SettingsDraft {
            csv_url: config.csv_url.clone(),
            ..SettingsDraft::default()
        };
        AppState {
            config,
            snapshot: None,
            cards: Vec::new(),
            colors: BucketColors::default(),
            view: ViewMode::Cards,
            draft,
            status_message: None,
            loading: false,
            settings_path: config::settings_path(),
            next_generation: 1,
            last_issued: 0,
            last_request_at: None,
            tx,
            rx,
        }
    }

    // -- Refresh cycle --

    /// Kick off a fetch of the configured source on a worker thread.
    pub fn request_refresh(&mut self) {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.last_issued = generation;
        self.last_request_at = Some(Instant::now());
        self.loading = true;

        let source = Source::parse(&self.config.csv_url);
        spawn_fetch(source, generation, self.tx.clone());
    }

    /// Whether the periodic refresh interval has elapsed (or no refresh
    /// has ever been requested).
    pub fn refresh_due(&self) -> bool {
        let interval = Duration::from_secs(self.config.refresh_minutes.max(1) * 60);
        match self.last_request_at {
            Some(at) => at.elapsed() >= interval,
            None => true,
        }
    }

    /// Drain completed fetches, applying the freshest one. Outcomes from
    /// a generation older than the applied snapshot are stale overlap
    /// leftovers and are dropped.
    pub fn poll_fetch(&mut self) {
        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.generation >= self.last_issued {
                self.loading = false;
            }
            let applied = self.snapshot.as_ref().map_or(0, |s| s.generation);
            if outcome.generation < applied {
                log::debug!(
                    "Discarding stale fetch #{} (applied #{applied})",
                    outcome.generation
                );
                continue;
            }
            match outcome.result {
                Ok(portfolio) => {
                    log::info!(
                        "Applied fetch #{} with {} rows",
                        outcome.generation,
                        portfolio.len()
                    );
                    self.snapshot = Some(Snapshot {
                        portfolio,
                        generation: outcome.generation,
                        fetched_at: Local::now(),
                    });
                    self.status_message = None;
                    self.rebuild_cards();
                }
                Err(e) => {
                    self.status_message =
                        Some("Could not load data. Check the CSV source in Settings.".to_string());
                    log::error!("Fetch #{} not applied: {e}", outcome.generation);
                }
            }
        }
    }

    /// Rebuild the cached card list from the snapshot and thresholds.
    pub fn rebuild_cards(&mut self) {
        self.cards = match &self.snapshot {
            Some(snapshot) => build_cards(snapshot.portfolio.rows(), &self.config.thresholds),
            None => Vec::new(),
        };
    }

    // -- Settings mutations --

    /// Commit the drafted CSV source: persist and refetch immediately.
    pub fn apply_csv_url(&mut self) {
        self.config.csv_url = self.draft.csv_url.trim().to_string();
        self.persist();
        self.request_refresh();
    }

    /// Open the threshold editor for an asset, pre-filling its bounds.
    pub fn open_asset_editor(&mut self, asset: &str) {
        let pair = self.config.thresholds.get(asset).copied().unwrap_or_default();
        self.draft.selected_asset = Some(asset.to_string());
        self.draft.low = pair.low.map(|v| v.to_string()).unwrap_or_default();
        self.draft.high = pair.high.map(|v| v.to_string()).unwrap_or_default();
    }

    /// Commit the drafted thresholds for the open asset. Non-numeric
    /// bounds leave the existing value untouched. Re-renders the current
    /// snapshot without refetching.
    pub fn apply_thresholds(&mut self) {
        let Some(asset) = self.draft.selected_asset.clone() else {
            return;
        };
        let entry = self.config.thresholds.entry(asset).or_default();
        if let Ok(low) = self.draft.low.trim().parse::<f64>() {
            entry.low = Some(low);
        }
        if let Ok(high) = self.draft.high.trim().parse::<f64>() {
            entry.high = Some(high);
        }
        self.persist();
        self.rebuild_cards();
        self.draft.selected_asset = None;
    }

    fn persist(&mut self) {
        if let Err(e) = self.config.save_to(&self.settings_path) {
            log::error!("Failed to save settings: {e:#}");
            self.status_message = Some(format!("Could not save settings: {e}"));
        }
    }
}
