use crate::directory::{SortType, UserRecord};
use crate::ui::mvi::Intent;

/// User and system events the home screen reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEvent {
    DepartmentSelected(String),
    SearchQueryChanged(String),
    SortTypeSelected(SortType),
    UserItemClicked(UserRecord),
    FilterButtonClicked,
    ScreenRefreshed,
}

impl Intent for HomeEvent {}
