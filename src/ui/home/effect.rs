use crate::directory::UserRecord;
use crate::ui::mvi::Effect;
use crate::ui::UiText;

/// One-shot instructions for the view.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeEffect {
    ShowFilterDialog,
    NavigateToDetails(UserRecord),
    NavigateToErrorScreen,
    ShowSnackbar(UiText),
}

impl Effect for HomeEffect {}
