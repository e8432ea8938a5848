use thiserror::Error;

use crate::directory::SortType;

/// One line typed into the console view.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Select a department; empty selects all.
    Department(String),
    /// Replace the search text; empty clears it.
    Search(String),
    Sort(SortType),
    /// Click the n-th row (1-based).
    Click(usize),
    Filter,
    Refresh,
    /// Print the current state.
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("invalid argument for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// Parse a console line such as `search ada` or `sort date`.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "dept" | "department" => Ok(ConsoleCommand::Department(rest.to_string())),
        "search" | "s" => Ok(ConsoleCommand::Search(rest.to_string())),
        "sort" => rest
            .parse::<SortType>()
            .map(ConsoleCommand::Sort)
            .map_err(|reason| CommandError::InvalidArgument {
                command: "sort",
                reason,
            }),
        "click" | "open" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => Ok(ConsoleCommand::Click(n)),
            _ => Err(CommandError::InvalidArgument {
                command: "click",
                reason: format!("expected a row number, got '{}'", rest),
            }),
        },
        "filter" => Ok(ConsoleCommand::Filter),
        "refresh" | "r" => Ok(ConsoleCommand::Refresh),
        "state" => Ok(ConsoleCommand::State),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
