//! Computer move selection.
//!
//! Every difficulty is a [`MoveSelector`]: given a board and the mark the
//! computer plays, return one empty index. Selectors only borrow the board;
//! applying the chosen index is the caller's job.

mod blocking;
mod minimax;
mod random;

pub use blocking::BlockingSelector;
pub use minimax::MinimaxSelector;
pub use random::RandomSelector;

use crate::{Board, Player};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Chooses the computer's next move.
pub trait MoveSelector {
    /// Returns the index of an empty square for `computer` to play.
    ///
    /// `rng` is the only source of randomness, so a seeded generator makes
    /// the choice reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoMoves`] if the board has no empty square.
    fn select_move(
        &self,
        board: &Board,
        computer: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SelectError>;
}

/// A move selector could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The board is full; there is nothing to choose from.
    #[display("No empty squares left to play")]
    NoMoves,
}

impl std::error::Error for SelectError {}

/// Computer opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Blocks an immediate opponent win, otherwise random.
    Medium,
    /// Full minimax search; never loses.
    Hard,
}

impl Difficulty {
    /// Returns the strategy for this difficulty.
    pub fn selector(self) -> &'static dyn MoveSelector {
        match self {
            Difficulty::Easy => &RandomSelector,
            Difficulty::Medium => &BlockingSelector,
            Difficulty::Hard => &MinimaxSelector,
        }
    }

    /// Cycles easy -> medium -> hard -> easy.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl MoveSelector for Difficulty {
    fn select_move(
        &self,
        board: &Board,
        computer: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SelectError> {
        self.selector().select_move(board, computer, rng)
    }
}
