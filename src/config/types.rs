use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

/// Behaviour of the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Quiet period after the last search keystroke before fetching (default: 400).
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Undelivered effects the queue holds before producers wait (default: 16).
    #[serde(default = "default_effect_buffer")]
    pub effect_buffer: usize,
    /// Cancel an in-flight fetch when a newer one starts (default: false).
    ///
    /// When false, emissions of overlapping fetches fold into the state in
    /// arrival order, so a slow stale response can overwrite newer data.
    #[serde(default)]
    pub supersede_fetches: bool,
}

/// Where collaborators keep persistent data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Preferences file. Defaults to `~/.config/homescreen/preferences.toml`.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
    /// Saved screen state, restored on start and written on exit.
    #[serde(default)]
    pub saved_state_path: Option<PathBuf>,
}

/// Source of directory data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// JSON array of user records.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Simulated repository latency in milliseconds (default: 0).
    #[serde(default)]
    pub latency_ms: u64,
}

fn default_search_debounce_ms() -> u64 {
    400
}

fn default_effect_buffer() -> usize {
    16
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            effect_buffer: default_effect_buffer(),
            supersede_fetches: false,
        }
    }
}

impl HomeConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl DirectoryConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
