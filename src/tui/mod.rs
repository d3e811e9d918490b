//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use app::{App, Control};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tictactoe_engine::GameSession;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How long the loop waits for a key before re-checking timers.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the terminal game until the user quits.
pub fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting tic-tac-toe TUI");

    let session = match config.seed() {
        Some(seed) => GameSession::seeded(*config.game(), *seed),
        None => GameSession::from_entropy(*config.game()),
    };
    let mut app = App::new(session, Duration::from_millis(*config.think_delay_ms()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, advance timers, handle one key; repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        app.tick(Instant::now());

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.on_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
