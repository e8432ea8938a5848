//! Key-value state scoped to one screen that survives process recreation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use thiserror::Error;

pub trait SavedState: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Debug, Error)]
pub enum SavedStateError {
    #[error("Failed to read saved state '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse saved state '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write saved state '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize saved state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// In-memory saved state that can be snapshotted to a JSON file.
#[derive(Debug, Default)]
pub struct MemorySavedState {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemorySavedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(values: BTreeMap<String, String>) -> Self {
        Self {
            values: RwLock::new(values),
        }
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.read().clone()
    }

    /// Restore from `path`. A missing file yields empty state.
    pub fn restore(path: &Path) -> Result<Self, SavedStateError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|e| SavedStateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let values = serde_json::from_str(&content).map_err(|e| SavedStateError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_snapshot(values))
    }

    pub fn persist(&self, path: &Path) -> Result<(), SavedStateError> {
        let write_err = |e| SavedStateError::Write {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = serde_json::to_string_pretty(&self.snapshot())?;
        fs::write(path, content).map_err(write_err)
    }
}

impl SavedState for MemorySavedState {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_returns_last_set_value() {
        let state = MemorySavedState::new();
        assert_eq!(state.get("search"), None);
        state.set("search", "ad");
        state.set("search", "ada");
        assert_eq!(state.get("search").as_deref(), Some("ada"));
    }

    #[test]
    fn persist_and_restore_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let state = MemorySavedState::new();
        state.set("filter", "Eng");
        state.persist(&path).unwrap();

        let restored = MemorySavedState::restore(&path).unwrap();
        assert_eq!(restored.get("filter").as_deref(), Some("Eng"));
    }

    #[test]
    fn restore_without_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let restored = MemorySavedState::restore(&dir.path().join("absent.json")).unwrap();
        assert!(restored.snapshot().is_empty());
    }

    #[test]
    fn persist_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = MemorySavedState::new()
            .persist(&blocker.join("state.json"))
            .unwrap_err();
        assert!(matches!(err, SavedStateError::Write { .. }));
    }

    #[test]
    fn serialization_failure_converts_into_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SavedStateError::from(source);
        assert!(matches!(err, SavedStateError::Serialize(_)));
        assert!(err.to_string().starts_with("Failed to serialize saved state"));
    }
}
