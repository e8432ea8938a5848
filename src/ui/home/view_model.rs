//! Home screen view model.
//!
//! Turns [`HomeEvent`]s into state transitions, repository fetches and
//! one-shot [`HomeEffect`]s. Every asynchronous operation runs as a job of
//! the view model's [`ScreenScope`] and stops when the view model is closed
//! or dropped.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::config::HomeConfig;
use crate::connectivity::ConnectivityObserver;
use crate::directory::{HomeRepository, Resource, SortType};
use crate::preferences::UserPreferences;
use crate::saved_state::SavedState;
use crate::scope::{Job, ScreenScope};
use crate::ui::mvi::{EffectChannel, EffectReceiver, EffectSender, StateStore};

use super::effect::HomeEffect;
use super::intent::HomeEvent;
use super::reducer::{HomeMutation, HomeReducer};
use super::state::{HomeState, LoadingState};

/// Saved-state key of the search query.
pub const KEY_SEARCH_SAVED_STATE: &str = "search";
/// Saved-state key of the department filter.
pub const KEY_FILTER_SAVED_STATE: &str = "filter";
const DEFAULT_VALUE: &str = "";

/// Collaborators the home screen is built from.
#[derive(Clone)]
pub struct HomeDependencies {
    pub repository: Arc<dyn HomeRepository>,
    pub preferences: Arc<dyn UserPreferences>,
    pub connectivity: Arc<dyn ConnectivityObserver>,
    pub saved_state: Arc<dyn SavedState>,
}

/// Parameters of one repository fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub department: String,
    pub sort_type: SortType,
    pub search_query: String,
    /// Indicator shown while the fetch is loading.
    pub indicator: LoadingState,
}

impl FetchRequest {
    /// Request built from the current filters, with the snackbar indicator.
    pub fn from_state(state: &HomeState) -> Self {
        Self {
            department: state.department_filter.clone(),
            sort_type: state.sort_type,
            search_query: state.search_query.clone(),
            indicator: LoadingState::Snackbar,
        }
    }

    pub fn with_indicator(mut self, indicator: LoadingState) -> Self {
        self.indicator = indicator;
        self
    }
}

pub struct HomeViewModel {
    inner: Arc<Inner>,
}

struct Inner {
    store: StateStore<HomeState>,
    effects: EffectSender<HomeEffect>,
    deps: HomeDependencies,
    scope: ScreenScope,
    search_debounce: Duration,
    supersede_fetches: bool,
    /// Pending debounced search fetch. At most one exists at a time.
    search_job: Mutex<Option<Job>>,
    /// Latest fetch, tracked only when superseding fetches.
    fetch_job: Mutex<Option<Job>>,
    effect_backlog: Mutex<EffectBacklog>,
}

/// Effects waiting for room in the effect queue.
///
/// While `draining` is set, a single job forwards `queue` in order and every
/// new effect is appended behind it, so nothing overtakes a waiting effect.
#[derive(Default)]
struct EffectBacklog {
    queue: VecDeque<HomeEffect>,
    draining: bool,
}

impl HomeViewModel {
    /// Build the view model and the effect queue the view drains.
    ///
    /// Must be called from within a Tokio runtime: the initial fetch is
    /// started immediately.
    pub fn new(
        deps: HomeDependencies,
        config: &HomeConfig,
    ) -> (Self, EffectReceiver<HomeEffect>) {
        let (effects, receiver) = EffectChannel::bounded(config.effect_buffer);
        let inner = Arc::new(Inner {
            store: StateStore::default(),
            effects,
            deps,
            scope: ScreenScope::new(),
            search_debounce: config.search_debounce(),
            supersede_fetches: config.supersede_fetches,
            search_job: Mutex::new(None),
            fetch_job: Mutex::new(None),
            effect_backlog: Mutex::new(EffectBacklog::default()),
        });
        inner.init();
        (Self { inner }, receiver)
    }

    /// Current state snapshot.
    pub fn state(&self) -> HomeState {
        self.inner.store.state()
    }

    /// Observe state snapshots. The current snapshot is delivered first.
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.inner.store.subscribe()
    }

    pub fn on_event(&self, event: HomeEvent) {
        tracing::debug!(?event, "Home event");
        match event {
            HomeEvent::DepartmentSelected(department) => {
                self.inner.department_selected(department)
            }
            HomeEvent::SearchQueryChanged(query) => self.inner.search_query_changed(query),
            HomeEvent::SortTypeSelected(sort_type) => self.inner.sort_type_selected(sort_type),
            HomeEvent::UserItemClicked(user) => {
                self.inner.send_effect(HomeEffect::NavigateToDetails(user))
            }
            HomeEvent::FilterButtonClicked => self.inner.send_effect(HomeEffect::ShowFilterDialog),
            HomeEvent::ScreenRefreshed => self.inner.screen_refreshed(),
        }
    }

    /// Cancel every pending job. Further events still update state but
    /// start no new work.
    pub fn close(&self) {
        self.inner.scope.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.scope.is_cancelled()
    }
}

impl Drop for HomeViewModel {
    fn drop(&mut self) {
        self.inner.scope.cancel();
    }
}

impl Inner {
    fn init(self: &Arc<Self>) {
        if !self.deps.connectivity.has_internet_connection() {
            tracing::info!("No internet connection, redirecting to error screen");
            self.send_effect(HomeEffect::NavigateToErrorScreen);
            return;
        }

        let saved = &self.deps.saved_state;
        self.store.dispatch::<HomeReducer>(HomeMutation::Restore {
            sort_type: self.deps.preferences.fetch_sort_type(),
            department_filter: saved
                .get(KEY_FILTER_SAVED_STATE)
                .unwrap_or_else(|| DEFAULT_VALUE.to_string()),
            search_query: saved
                .get(KEY_SEARCH_SAVED_STATE)
                .unwrap_or_else(|| DEFAULT_VALUE.to_string()),
        });
        tracing::info!("Home screen initialized");

        let request =
            FetchRequest::from_state(&self.store.state()).with_indicator(LoadingState::Shimmer);
        self.fetch_data(request);
    }

    fn department_selected(self: &Arc<Self>, department: String) {
        if self.store.state().department_filter == department {
            return;
        }
        self.deps.saved_state.set(KEY_FILTER_SAVED_STATE, &department);
        let department = self.restore_saved(KEY_FILTER_SAVED_STATE);
        self.store
            .dispatch::<HomeReducer>(HomeMutation::DepartmentFilterChanged(department));
        self.fetch_current();
    }

    fn search_query_changed(self: &Arc<Self>, query: String) {
        if self.store.state().search_query == query {
            return;
        }
        self.deps.saved_state.set(KEY_SEARCH_SAVED_STATE, &query);
        let query = self.restore_saved(KEY_SEARCH_SAVED_STATE);
        self.store
            .dispatch::<HomeReducer>(HomeMutation::SearchQueryChanged(query));

        let mut search_job = self.search_job.lock();
        if let Some(previous) = search_job.take() {
            tracing::trace!("Search debounce restarted");
            previous.cancel();
        }
        let inner = Arc::clone(self);
        let delay = self.search_debounce;
        *search_job = Some(self.scope.launch("search-debounce", async move {
            tokio::time::sleep(delay).await;
            inner.fetch_current();
        }));
    }

    fn sort_type_selected(self: &Arc<Self>, sort_type: SortType) {
        self.deps.preferences.update_sort_type(sort_type);
        let sort_type = self.deps.preferences.fetch_sort_type();
        self.store
            .dispatch::<HomeReducer>(HomeMutation::SortTypeChanged(sort_type));
        self.fetch_current();
    }

    fn screen_refreshed(self: &Arc<Self>) {
        self.store.dispatch::<HomeReducer>(HomeMutation::RefreshFinished);
        self.fetch_current();
    }

    fn restore_saved(&self, key: &str) -> String {
        self.deps
            .saved_state
            .get(key)
            .unwrap_or_else(|| DEFAULT_VALUE.to_string())
    }

    fn fetch_current(self: &Arc<Self>) {
        self.fetch_data(FetchRequest::from_state(&self.store.state()));
    }

    fn fetch_data(self: &Arc<Self>, request: FetchRequest) {
        if self.scope.is_cancelled() {
            return;
        }
        let inner = Arc::clone(self);
        let job = self
            .scope
            .launch("fetch", async move { inner.run_fetch(request).await });

        if self.supersede_fetches {
            if let Some(previous) = self.fetch_job.lock().replace(job) {
                previous.cancel();
            }
        }
    }

    async fn run_fetch(self: Arc<Self>, request: FetchRequest) {
        tracing::debug!(
            department = %request.department,
            sort_type = %request.sort_type,
            query = %request.search_query,
            "Fetching directory"
        );
        let mut results = self.deps.repository.fetch_data(
            &request.department,
            request.sort_type,
            &request.search_query,
        );

        while let Some(resource) = results.next().await {
            match resource {
                Resource::Loading(true) => {
                    self.store
                        .dispatch::<HomeReducer>(HomeMutation::LoadingStarted(request.indicator));
                }
                Resource::Loading(false) => {
                    self.store.dispatch::<HomeReducer>(HomeMutation::LoadingFinished);
                }
                Resource::Success(data) => {
                    tracing::debug!(users = data.len(), "Directory fetched");
                    self.store.dispatch::<HomeReducer>(HomeMutation::DataLoaded(data));
                }
                Resource::Error(message) => {
                    tracing::warn!(%message, "Directory fetch failed");
                    self.send_effect(HomeEffect::ShowSnackbar(message));
                }
            }
        }
    }

    fn send_effect(self: &Arc<Self>, effect: HomeEffect) {
        let mut backlog = self.effect_backlog.lock();
        let effect = if backlog.draining {
            effect
        } else {
            match self.effects.try_emit(effect) {
                Ok(()) => return,
                Err(effect) => effect,
            }
        };

        tracing::debug!(?effect, "Effect queue full, delivering later");
        backlog.queue.push_back(effect);
        if !backlog.draining {
            backlog.draining = true;
            let inner = Arc::clone(self);
            self.scope
                .launch("effect-backlog", async move { inner.drain_backlog().await });
        }
    }

    async fn drain_backlog(&self) {
        loop {
            let next = {
                let mut backlog = self.effect_backlog.lock();
                match backlog.queue.pop_front() {
                    Some(effect) => effect,
                    None => {
                        backlog.draining = false;
                        return;
                    }
                }
            };
            self.effects.emit(next).await;
        }
    }
}
