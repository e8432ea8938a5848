//! Pure state transitions of the home screen.

use crate::directory::{SortType, UserRecord};
use crate::ui::mvi::{Intent, Reducer};

use super::state::{HomeState, LoadingState};

/// State changes requested by the view model.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeMutation {
    /// Values restored from preferences and saved state at startup.
    Restore {
        sort_type: SortType,
        department_filter: String,
        search_query: String,
    },
    DepartmentFilterChanged(String),
    SearchQueryChanged(String),
    SortTypeChanged(SortType),
    RefreshFinished,
    LoadingStarted(LoadingState),
    LoadingFinished,
    DataLoaded(Vec<UserRecord>),
}

impl Intent for HomeMutation {}

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeMutation;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeMutation::Restore {
                sort_type,
                department_filter,
                search_query,
            } => HomeState {
                sort_type,
                department_filter,
                search_query,
                ..state
            },
            HomeMutation::DepartmentFilterChanged(department_filter) => HomeState {
                department_filter,
                ..state
            },
            HomeMutation::SearchQueryChanged(search_query) => HomeState {
                search_query,
                ..state
            },
            HomeMutation::SortTypeChanged(sort_type) => HomeState { sort_type, ..state },
            HomeMutation::RefreshFinished => HomeState {
                is_refreshing: false,
                ..state
            },
            HomeMutation::LoadingStarted(loading_state) => HomeState {
                loading_state,
                ..state
            },
            HomeMutation::LoadingFinished => HomeState {
                loading_state: LoadingState::None,
                ..state
            },
            HomeMutation::DataLoaded(data) => HomeState { data, ..state },
        }
    }
}
