pub mod home;
pub mod mvi;

mod text;

pub use text::UiText;
