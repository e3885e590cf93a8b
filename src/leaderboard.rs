//! Per-Location Leaderboard
//!
//! Best score ever achieved per location label, persisted as a small
//! JSON file. The stored best is monotonically non-decreasing per key:
//! `record` only ever raises it. Read at weather-setup time, written
//! at game over; store failures stay at this boundary and never reach
//! the session.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Persistent-store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error reading or writing the store.
    #[error("score store I/O: {0}")]
    Io(#[from] std::io::Error),

    /// Store file exists but is not valid JSON.
    #[error("score store format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Best-score-per-location mapping.
///
/// BTreeMap keeps the file diff-stable across saves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: BTreeMap<String, u32>,
}

impl Leaderboard {
    /// Empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best score for a location; zero if it has never been played.
    pub fn best(&self, label: &str) -> u32 {
        self.entries.get(label).copied().unwrap_or(0)
    }

    /// Record a finished run. Keeps the maximum of the stored and the
    /// new score, so the stored best never decreases. Returns whether
    /// the score improved the best.
    pub fn record(&mut self, label: &str, score: u32) -> bool {
        let entry = self.entries.entry(label.to_string()).or_insert(0);
        if score > *entry {
            debug!(label, old = *entry, new = score, "leaderboard improved");
            *entry = score;
            true
        } else {
            false
        }
    }

    /// Number of locations with a recorded best.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(label, best)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(label, best)| (label.as_str(), *best))
    }

    /// Load from a JSON file. A missing file is an empty leaderboard,
    /// not an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
