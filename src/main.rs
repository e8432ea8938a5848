use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use homescreen::args::{parse_command, Cli, ConsoleCommand};
use homescreen::config::Config;
use homescreen::connectivity::StaticConnectivity;
use homescreen::directory::DirectoryRepository;
use homescreen::logging::init_tracing;
use homescreen::preferences::FilePreferences;
use homescreen::saved_state::MemorySavedState;
use homescreen::ui::home::{
    HomeDependencies, HomeEffect, HomeEvent, HomeState, HomeUserItem, HomeViewModel, LoadingState,
};

const HELP: &str = "\
commands:
  dept <name>       filter by department (empty: all)
  search <text>     search by name or tag (empty: clear)
  sort name|date    change ordering
  click <n>         open row n
  filter            open the department filter
  refresh           reload the list
  state             print the current state
  quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading default config")?,
    };

    let directory_path = cli.directory.clone().or(config.directory.path.clone());
    let mut repository = match &directory_path {
        Some(path) => DirectoryRepository::load_from(path)?,
        None => DirectoryRepository::default(),
    };
    let latency = cli
        .latency_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| config.directory.latency());
    repository = repository.with_latency(latency);
    if let Some(message) = &cli.fail_with {
        repository = repository.with_failure(message.clone());
    }

    let preferences_path = config
        .storage
        .preferences_path
        .clone()
        .unwrap_or_else(FilePreferences::default_path);
    let preferences = FilePreferences::open(preferences_path)?;

    let state_path: Option<PathBuf> = cli
        .state_file
        .clone()
        .or(config.storage.saved_state_path.clone());
    let saved_state = Arc::new(match &state_path {
        Some(path) => MemorySavedState::restore(path)?,
        None => MemorySavedState::new(),
    });

    let connectivity = if cli.offline {
        StaticConnectivity::offline()
    } else {
        StaticConnectivity::online()
    };

    let deps = HomeDependencies {
        repository: Arc::new(repository),
        preferences: Arc::new(preferences),
        connectivity: Arc::new(connectivity),
        saved_state: saved_state.clone(),
    };
    let (view_model, mut effects) = HomeViewModel::new(deps, &config.home);
    let mut states = view_model.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rendered = HomeState::default();

    println!("{}", HELP);
    loop {
        tokio::select! {
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = states.borrow_and_update().clone();
                render_state(&rendered, &state);
                rendered = state;
            }
            effect = effects.recv() => {
                let Some(effect) = effect else { break };
                if !render_effect(effect) {
                    break;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else { break };
                match parse_command(&line) {
                    Ok(ConsoleCommand::Quit) => break,
                    Ok(command) => handle_command(&view_model, command),
                    Err(e) => println!("! {}", e),
                }
            }
        }
    }

    view_model.close();
    if let Some(path) = &state_path {
        saved_state.persist(path)?;
    }
    Ok(())
}

fn handle_command(view_model: &HomeViewModel, command: ConsoleCommand) {
    match command {
        ConsoleCommand::Department(name) => {
            view_model.on_event(HomeEvent::DepartmentSelected(name))
        }
        ConsoleCommand::Search(text) => view_model.on_event(HomeEvent::SearchQueryChanged(text)),
        ConsoleCommand::Sort(sort_type) => {
            view_model.on_event(HomeEvent::SortTypeSelected(sort_type))
        }
        ConsoleCommand::Click(row) => {
            let items = HomeUserItem::from_state(&view_model.state());
            match items.get(row - 1) {
                Some(item) => view_model.on_event(item.click()),
                None => println!("! no row {}", row),
            }
        }
        ConsoleCommand::Filter => view_model.on_event(HomeEvent::FilterButtonClicked),
        ConsoleCommand::Refresh => view_model.on_event(HomeEvent::ScreenRefreshed),
        ConsoleCommand::State => print_state(&view_model.state()),
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => {}
    }
}

fn render_state(previous: &HomeState, state: &HomeState) {
    if previous.loading_state != state.loading_state {
        match state.loading_state {
            LoadingState::Shimmer => println!("[loading ...]"),
            LoadingState::Snackbar => println!("[refreshing]"),
            LoadingState::None => {}
        }
    }
    if previous.data != state.data || previous.sort_type != state.sort_type {
        print_list(state);
    }
}

fn print_state(state: &HomeState) {
    println!(
        "department: {:?}  search: {:?}  sort: {}  loading: {:?}",
        state.department_filter, state.search_query, state.sort_type, state.loading_state
    );
    print_list(state);
}

fn print_list(state: &HomeState) {
    let items = HomeUserItem::from_state(state);
    if items.is_empty() {
        println!("  (no users)");
    }
    for (index, item) in items.iter().enumerate() {
        println!("  {:>3}. {}", index + 1, item);
    }
}

/// Returns false when the screen should close.
fn render_effect(effect: HomeEffect) -> bool {
    match effect {
        HomeEffect::ShowFilterDialog => {
            println!("> filter: type 'dept <name>' or 'dept' for all departments");
        }
        HomeEffect::NavigateToDetails(user) => {
            println!(
                "> {} (@{}), {}, birthday {}",
                user.name, user.user_tag, user.department, user.birthday_day
            );
        }
        HomeEffect::NavigateToErrorScreen => {
            println!("> no internet connection");
            return false;
        }
        HomeEffect::ShowSnackbar(message) => println!("! {}", message),
    }
    true
}
