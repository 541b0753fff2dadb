// workout-calendar-tui/src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::{io, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_calendar_lib::{get_log_path_util, AppService, DateKey};

mod app; // Application state
mod ui; // UI rendering logic

use crate::app::App;

#[derive(Parser, Debug)]
#[command(author, version, about = "A terminal calendar for logging workouts", long_about = None)]
struct Cli {
    /// Day to open on (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    date: Option<DateKey>,

    /// Where to write the log; defaults to workout-calendar.log in the config directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {log_path:?}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workout_calendar_lib=info,wcal=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file so they never draw over the terminal UI
    let log_path = match cli.log_file {
        Some(path) => path,
        None => get_log_path_util().context("Failed to determine log file path")?,
    };
    init_logging(&log_path)?;

    // Initialize the library service
    let mut app_service = AppService::initialize().context("Failed to initialize AppService")?;
    if let Some(date) = cli.date.as_ref().and_then(DateKey::to_date) {
        app_service.go_to_date(date);
    }
    tracing::info!("Starting on {}", app_service.selected_key());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(app_service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Exited with error: {err:?}");
        eprintln!("Error: {err:?}"); // Print errors to stderr
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Ensure data is fresh before drawing
        app.refresh_data_for_active_tab();

        terminal.draw(|f| ui::render_ui(f, app))?;

        // Poll with a timeout so expired status messages get cleared
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
