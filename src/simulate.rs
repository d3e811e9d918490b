//! Headless computer-vs-computer games.

use anyhow::Result;
use derive_getters::Getters;
use rand::{Rng, RngCore};
use tictactoe_engine::{
    Board, Difficulty, GameOutcome, MoveSelector, Player, apply_move, check_outcome,
};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games X won.
    x_wins: u32,
    /// Games O won.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts a finished game. Unfinished games are not counted.
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game to the end. The first player is chosen at random.
///
/// Returns the final outcome and board.
#[instrument(skip(rng))]
pub fn play_game(
    x: Difficulty,
    o: Difficulty,
    rng: &mut dyn RngCore,
) -> Result<(GameOutcome, Board)> {
    let mut board = Board::new();
    let mut to_move = if rng.gen_bool(0.5) { Player::X } else { Player::O };

    loop {
        let outcome = check_outcome(&board);
        if outcome.is_terminal() {
            return Ok((outcome, board));
        }

        let side = match to_move {
            Player::X => x,
            Player::O => o,
        };
        let index = side.select_move(&board, to_move, rng)?;
        board = apply_move(&board, index, to_move)?;
        debug!(%to_move, index, "Simulated move");
        to_move = to_move.opponent();
    }
}

/// Plays `games` games and tallies the outcomes.
#[instrument(skip(rng))]
pub fn run(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    rng: &mut dyn RngCore,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for game in 0..games {
        let (outcome, board) = play_game(x, o, rng)?;
        debug!(game, ?outcome, board = %board.display(), "Game finished");
        tally.record(outcome);
    }
    info!(%tally, "Simulation complete");
    Ok(tally)
}
