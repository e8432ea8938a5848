//! Command-line flags and console commands of the `homescreen` binary.

mod command;

pub use command::{parse_command, CommandError, ConsoleCommand};

use std::path::PathBuf;

use clap::Parser;

/// Browse a user directory from the terminal.
#[derive(Debug, Parser)]
#[command(name = "homescreen", version)]
pub struct Cli {
    /// Config file (default: ~/.config/homescreen/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with the user directory. Overrides `directory.path`.
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Start as if the device had no internet connection.
    #[arg(long)]
    pub offline: bool,

    /// Simulated repository latency. Overrides `directory.latency_ms`.
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Saved screen state file. Overrides `storage.saved_state_path`.
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Make every fetch fail with this message.
    #[arg(long, value_name = "MESSAGE")]
    pub fail_with: Option<String>,
}
