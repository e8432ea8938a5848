use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserPreferences;
use crate::directory::SortType;

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write preferences file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// On-disk layout of the preferences file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    sort_type: SortType,
}

/// Preferences backed by a TOML file.
///
/// The file is read once on open and rewritten on every update.
pub struct FilePreferences {
    path: PathBuf,
    current: RwLock<PreferencesFile>,
}

impl FilePreferences {
    /// Default location: `~/.config/homescreen/preferences.toml`.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("homescreen").join("preferences.toml")
    }

    /// Open preferences at `path`. A missing file yields defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let current = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| PreferencesError::Read {
                path: path.clone(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| PreferencesError::Parse {
                path: path.clone(),
                source: e,
            })?
        } else {
            PreferencesFile::default()
        };

        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, prefs: &PreferencesFile) -> Result<(), PreferencesError> {
        let content = toml::to_string_pretty(prefs)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PreferencesError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        fs::write(&self.path, content).map_err(|e| PreferencesError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl UserPreferences for FilePreferences {
    fn fetch_sort_type(&self) -> SortType {
        self.current.read().sort_type
    }

    fn update_sort_type(&self, sort_type: SortType) {
        let snapshot = {
            let mut current = self.current.write();
            current.sort_type = sort_type;
            current.clone()
        };
        if let Err(e) = self.save(&snapshot) {
            tracing::warn!(error = %e, "Failed to persist sort type");
        }
    }
}
