//! Repository that records fetches and replays scripted emissions.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;

use homescreen::directory::{HomeRepository, Resource, SortType, UserRecord};
use homescreen::ui::UiText;

/// Arguments of one `fetch_data` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub department: String,
    pub sort_type: SortType,
    pub search_query: String,
}

/// Emissions of one fetch, each preceded by a delay.
#[derive(Debug, Clone)]
pub struct Script {
    steps: Vec<(Duration, Resource<Vec<UserRecord>>)>,
}

impl Script {
    /// Loading start, end, then `data`, all immediate.
    pub fn success(data: Vec<UserRecord>) -> Self {
        Self::success_after(Duration::ZERO, data)
    }

    /// Loading start, then after `delay` loading end and `data`.
    pub fn success_after(delay: Duration, data: Vec<UserRecord>) -> Self {
        Self {
            steps: vec![
                (Duration::ZERO, Resource::Loading(true)),
                (delay, Resource::Loading(false)),
                (Duration::ZERO, Resource::Success(data)),
            ],
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            steps: vec![
                (Duration::ZERO, Resource::Loading(true)),
                (Duration::ZERO, Resource::Loading(false)),
                (
                    Duration::ZERO,
                    Resource::Error(UiText::Dynamic(message.to_string())),
                ),
            ],
        }
    }

    fn into_stream(self) -> BoxStream<'static, Resource<Vec<UserRecord>>> {
        stream::iter(self.steps)
            .then(|(delay, resource)| async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                resource
            })
            .boxed()
    }
}

#[derive(Default)]
pub struct MockRepository {
    calls: Mutex<Vec<FetchCall>>,
    scripts: Mutex<VecDeque<Script>>,
    fallback: Mutex<Vec<UserRecord>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the emissions of the next unscripted call.
    pub fn push(&self, script: Script) {
        self.scripts.lock().push_back(script);
    }

    /// Data returned once the queued scripts run out.
    pub fn set_fallback(&self, data: Vec<UserRecord>) {
        *self.fallback.lock() = data;
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl HomeRepository for MockRepository {
    fn fetch_data(
        &self,
        department: &str,
        sort_type: SortType,
        search_query: &str,
    ) -> BoxStream<'static, Resource<Vec<UserRecord>>> {
        self.calls.lock().push(FetchCall {
            department: department.to_string(),
            sort_type,
            search_query: search_query.to_string(),
        });
        let script = self
            .scripts
            .lock()
            .pop_front()
            .unwrap_or_else(|| Script::success(self.fallback.lock().clone()));
        script.into_stream()
    }
}
