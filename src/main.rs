//! Signup TUI - terminal registration form
//!
//! A Ratatui-based form that validates a new account locally and creates it
//! through the account service.

mod api;
mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use api::AccountClient;
use app::App;
use config::SignupConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "signup-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = SignupConfig::load_or_init()?;
    let client = AccountClient::new(&config.api_base_url(), config.request_timeout())?;
    tracing::info!("Registering accounts at {}", client.users_url());

    let mut app = App::new(Arc::new(client), config.notification_ttl());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file under the data dir; the terminal belongs to the UI
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "signup_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file() -> Option<File> {
    let dir = config::log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let poll_duration = Duration::from_millis(100);

    loop {
        // Apply finished requests and expire toasts before drawing
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        app.request_quit();
                    } else {
                        app.handle_key(key);
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
