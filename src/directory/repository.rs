use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use thiserror::Error;

use super::model::{SortType, UserRecord};
use super::resource::Resource;
use crate::ui::UiText;

/// Source of directory listings for the home screen.
pub trait HomeRepository: Send + Sync {
    /// Start a fetch and return its progressive result stream.
    fn fetch_data(
        &self,
        department: &str,
        sort_type: SortType,
        search_query: &str,
    ) -> BoxStream<'static, Resource<Vec<UserRecord>>>;
}

/// Errors that can occur when loading a directory file.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read directory file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse directory file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// In-memory directory.
///
/// Filters by department (empty matches all), searches name and user tag
/// case-insensitively, and sorts by name or birthday.
#[derive(Clone, Default)]
pub struct DirectoryRepository {
    users: Arc<Vec<UserRecord>>,
    latency: Duration,
    failure: Option<String>,
}

impl DirectoryRepository {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users: Arc::new(users),
            latency: Duration::ZERO,
            failure: None,
        }
    }

    /// Load users from a JSON array of records.
    pub fn load_from(path: &Path) -> Result<Self, DirectoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| DirectoryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let users: Vec<UserRecord> =
            serde_json::from_str(&content).map_err(|e| DirectoryError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
        tracing::info!(path = %path.display(), users = users.len(), "Directory loaded");
        Ok(Self::new(users))
    }

    /// Delay between loading start and the result.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail with `message`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Run the query synchronously.
    pub fn query(&self, department: &str, sort_type: SortType, search_query: &str) -> Vec<UserRecord> {
        let needle = search_query.trim().to_lowercase();
        let mut users: Vec<UserRecord> = self
            .users
            .iter()
            .filter(|u| department.is_empty() || u.department == department)
            .filter(|u| {
                needle.is_empty()
                    || u.name.to_lowercase().contains(&needle)
                    || u.user_tag.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        match sort_type {
            SortType::ByName => users.sort_by(|a, b| a.name.cmp(&b.name)),
            SortType::ByDate => users.sort_by(|a, b| {
                a.birthday_day
                    .cmp(&b.birthday_day)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        users
    }
}

impl HomeRepository for DirectoryRepository {
    fn fetch_data(
        &self,
        department: &str,
        sort_type: SortType,
        search_query: &str,
    ) -> BoxStream<'static, Resource<Vec<UserRecord>>> {
        let repo = self.clone();
        let department = department.to_string();
        let search_query = search_query.to_string();

        let outcome = async move {
            if !repo.latency.is_zero() {
                tokio::time::sleep(repo.latency).await;
            }
            let result = match &repo.failure {
                Some(message) => Resource::Error(UiText::Dynamic(message.clone())),
                None => Resource::Success(repo.query(&department, sort_type, &search_query)),
            };
            stream::iter([Resource::Loading(false), result])
        };

        stream::once(async { Resource::Loading(true) })
            .chain(stream::once(outcome).flatten())
            .boxed()
    }
}
