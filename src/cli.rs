//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Difficulty, GameMode, Player};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Play computer-vs-computer games headless and print the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Strength of the X side
        #[arg(short, long, default_value = "hard")]
        x: Difficulty,

        /// Strength of the O side
        #[arg(short, long, default_value = "hard")]
        o: Difficulty,

        /// Seed for reproducible runs (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Options for the terminal game; each overrides the config file.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// single (vs computer) or multi (two humans)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// The mark the computer plays (X or O)
    #[arg(long)]
    pub computer: Option<Player>,

    /// Milliseconds the computer "thinks" before moving
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}
