//! Registration TUI - a terminal registration form
//!
//! A Ratatui-based form with inline validation on submit and a summary
//! card for the last accepted registration.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Event poll interval
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = TuiConfig::load();

    // Initialize logging
    let filter = config
        .as_ref()
        .map(TuiConfig::log_filter)
        .unwrap_or(config::DEFAULT_LOG_FILTER)
        .to_string();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = config.unwrap_or_else(|err| {
        tracing::warn!("Using default configuration: {err:#}");
        TuiConfig::default()
    });
    let mouse_capture = config.mouse_capture();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse_capture {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.terminal_size = Some((size.height, size.width));

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events; each handler runs to completion before the next
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse)?,
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            tracing::debug!("quit requested");
            return Ok(());
        }
    }
}
