//! Shared test utilities and mock collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_repository;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use homescreen::config::HomeConfig;
use homescreen::connectivity::StaticConnectivity;
use homescreen::directory::{SortType, UserRecord};
use homescreen::preferences::{MemoryPreferences, UserPreferences};
use homescreen::saved_state::{MemorySavedState, SavedState};
use homescreen::ui::home::HomeDependencies;

pub use mock_repository::{FetchCall, MockRepository, Script};

pub fn user(name: &str, department: &str, birthday: &str) -> UserRecord {
    UserRecord {
        name: name.to_string(),
        user_tag: name.to_lowercase(),
        department: department.to_string(),
        birthday_day: birthday.to_string(),
    }
}

/// Let every ready task run; advances the paused clock by 1ms.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

/// Saved state that counts writes.
#[derive(Default)]
pub struct CountingSavedState {
    inner: MemorySavedState,
    writes: AtomicUsize,
}

impl CountingSavedState {
    pub fn with(values: &[(&str, &str)]) -> Self {
        let state = Self::default();
        for (key, value) in values {
            state.inner.set(key, value);
        }
        state
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SavedState for CountingSavedState {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value);
    }
}

/// Preferences that ignore updates and always report the same sort type.
pub struct FixedPreferences(pub SortType);

impl UserPreferences for FixedPreferences {
    fn fetch_sort_type(&self) -> SortType {
        self.0
    }

    fn update_sort_type(&self, _sort_type: SortType) {}
}

/// Collaborators with handles kept for assertions.
pub struct Harness {
    pub repository: Arc<MockRepository>,
    pub preferences: Arc<dyn UserPreferences>,
    pub saved_state: Arc<CountingSavedState>,
    pub online: bool,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            repository: Arc::new(MockRepository::new()),
            preferences: Arc::new(MemoryPreferences::default()),
            saved_state: Arc::new(CountingSavedState::default()),
            online: true,
        }
    }

    pub fn offline(mut self) -> Self {
        self.online = false;
        self
    }

    pub fn with_saved(mut self, values: &[(&str, &str)]) -> Self {
        self.saved_state = Arc::new(CountingSavedState::with(values));
        self
    }

    pub fn with_preferences(mut self, preferences: impl UserPreferences + 'static) -> Self {
        self.preferences = Arc::new(preferences);
        self
    }

    pub fn deps(&self) -> HomeDependencies {
        let connectivity = if self.online {
            StaticConnectivity::online()
        } else {
            StaticConnectivity::offline()
        };
        HomeDependencies {
            repository: self.repository.clone(),
            preferences: self.preferences.clone(),
            connectivity: Arc::new(connectivity),
            saved_state: self.saved_state.clone(),
        }
    }

    pub fn config() -> HomeConfig {
        HomeConfig::default()
    }
}
