//! Home screen feature module.
//!
//! Lists the user directory with department filter, search and sort.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state snapshot and loading indicator
//! - `intent.rs` - User events (DepartmentSelected, SearchQueryChanged, ...)
//! - `effect.rs` - One-shot view instructions (navigation, dialogs, snackbar)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view_model.rs` - Event handling, fetch orchestration, search debounce
//! - `item.rs` - Row model for the list

mod effect;
mod intent;
mod item;
mod reducer;
mod state;
mod view_model;

pub use effect::HomeEffect;
pub use intent::HomeEvent;
pub use item::HomeUserItem;
pub use reducer::{HomeMutation, HomeReducer};
pub use state::{HomeState, LoadingState};
pub use view_model::{
    FetchRequest, HomeDependencies, HomeViewModel, KEY_FILTER_SAVED_STATE, KEY_SEARCH_SAVED_STATE,
};
