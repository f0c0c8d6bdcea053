mod app;
mod config;
mod error;
mod events;
mod input;
mod store;
mod style;
mod types;
mod views;
use crate::error::Result;
use crate::views::home::run_home;
use crate::{app::App, config::Config, store::TaskStore};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use log::{debug, info};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io::stdout};

/// Sends log records to the configured file. The terminal belongs to the UI,
/// so nothing is logged unless `RUST_LOG` asks for it.
fn init_logging(config: &Config) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::default();
    init_logging(&config)?;

    let store = TaskStore::new(&config.database);
    if store.init_if_absent(&config.placeholder_task)? {
        info!("Created database at {:?}", store.path());
    }
    let mut app = App::new(store, &config);
    app.hydrate()?;

    debug!("Entering terminal UI...");
    execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        SetTitle(&config.title)
    )?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let outcome = run_home(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        stdout(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    outcome
}
