//! Persisted user preferences.
//!
//! Reads are synchronous; writes are fire-and-forget. A failed write is
//! logged and the in-memory value still changes, so the screen keeps
//! working when the backing file is unavailable.

mod file;

pub use file::{FilePreferences, PreferencesError};

use parking_lot::RwLock;

use crate::directory::SortType;

pub trait UserPreferences: Send + Sync {
    fn fetch_sort_type(&self) -> SortType;
    fn update_sort_type(&self, sort_type: SortType);
}

/// Preferences kept only for the lifetime of the process.
#[derive(Default)]
pub struct MemoryPreferences {
    sort_type: RwLock<SortType>,
}

impl MemoryPreferences {
    pub fn new(sort_type: SortType) -> Self {
        Self {
            sort_type: RwLock::new(sort_type),
        }
    }
}

impl UserPreferences for MemoryPreferences {
    fn fetch_sort_type(&self) -> SortType {
        *self.sort_type.read()
    }

    fn update_sort_type(&self, sort_type: SortType) {
        *self.sort_type.write() = sort_type;
    }
}
