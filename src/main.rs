// SlotBot: block-stacking slot controller with undo and replay

use std::error::Error;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::sync::Mutex;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use slotbot::cli::build_cli;
use slotbot::config::{Config, Mode};
use slotbot::interpreter::store::SlotStore;
use slotbot::ui::{repl, App};

fn main() -> Result<(), Box<dyn Error>> {
    let matches = build_cli().get_matches();

    let mut config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    // The full-screen interface needs a real terminal on both ends
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        config.mode = Mode::Plain;
    }

    init_logging(&config)?;
    info!(mode = ?config.mode, snapshot_limit = config.snapshot_limit, "starting slotbot");

    let store = SlotStore::new(config.snapshot_limit);
    match config.mode {
        Mode::Plain => repl::run(store, config)?,
        Mode::Tui => run_tui(store, config)?,
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Logs go to `--log-file` when given. Without one, the plain prompt logs to
/// stderr and the TUI logs nothing, since stderr shares its screen.
fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slotbot=warn"));

    match (&config.log_file, config.mode) {
        (Some(path), _) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        (None, Mode::Plain) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        (None, Mode::Tui) => {}
    }

    Ok(())
}

fn run_tui(store: SlotStore, config: Config) -> Result<(), Box<dyn Error>> {
    let initial_size = config.initial_size;
    let mut app = App::new(store, config);
    if let Some(size) = initial_size {
        app.submit(&size.to_string());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
