pub mod args;
pub mod config;
pub mod connectivity;
pub mod directory;
pub mod logging;
pub mod preferences;
pub mod saved_state;
pub mod scope;
pub mod ui;
