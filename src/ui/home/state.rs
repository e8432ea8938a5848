use crate::directory::{SortType, UserRecord};
use crate::ui::mvi::UiState;

/// Which progress indicator the view shows while a fetch is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    None,
    /// Full-list placeholder, used for the first load.
    Shimmer,
    /// Small inline indicator, used for reloads.
    Snackbar,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    /// Result of the last successful fetch.
    pub data: Vec<UserRecord>,
    pub sort_type: SortType,
    /// Empty string means every department.
    pub department_filter: String,
    pub search_query: String,
    pub loading_state: LoadingState,
    pub is_refreshing: bool,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn is_loading(&self) -> bool {
        self.loading_state != LoadingState::None
    }
}
