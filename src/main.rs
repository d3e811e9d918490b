//! Tic-tac-toe - Unified CLI
//!
//! Play in the terminal, or run headless computer-vs-computer games.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod simulate;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::Difficulty;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command {
        Command::Play(args) => tui::run_tui(config.with_play_args(&args)),
        Command::Simulate { games, x, o, seed } => {
            init_stderr_logging();
            run_simulation(games, x, o, seed.or(*config.seed()))
        }
    }
}

/// Send logs to stderr so stdout carries only the tally.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run headless games and print the tally
#[instrument]
fn run_simulation(games: u32, x: Difficulty, o: Difficulty, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    info!(games, %x, %o, "Starting simulation");
    let tally = simulate::run(games, x, o, &mut rng)?;
    println!("{tally}");

    Ok(())
}
