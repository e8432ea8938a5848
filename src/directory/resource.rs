use crate::ui::UiText;

/// One emission of a progressive fetch.
///
/// A well-formed stream emits `Loading(true)`, then `Loading(false)`, then
/// either `Success` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading(bool),
    Success(T),
    Error(UiText),
}
