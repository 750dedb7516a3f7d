//! Transit TUI - Main entry point
//!
//! Sets up logging and the terminal, runs the interactive session, and
//! restores the terminal on the way out.

use std::io::stdout;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use transit_tui::app::App;
use transit_tui::cli::Cli;
use transit_tui::error::TransitTuiError;

/// Initialize the logger with appropriate settings
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    // RUST_LOG overrides the flag when set. Logs go to stderr so they stay
    // out of the alternate screen.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    info!("transit-tui starting up");

    run_tui()?;

    info!("transit-tui finished");
    Ok(())
}

fn run_tui() -> anyhow::Result<()> {
    debug!("initializing terminal");

    enable_raw_mode()
        .map_err(|e| TransitTuiError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        TransitTuiError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TransitTuiError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    // Always restore the terminal, even if the session failed.
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;
    Ok(())
}
