//! Easy difficulty: a uniformly random legal move.

use super::{MoveSelector, SelectError};
use crate::rules::empty_indices;
use crate::{Board, Player};
use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl MoveSelector for RandomSelector {
    #[instrument(skip(self, board, rng))]
    fn select_move(
        &self,
        board: &Board,
        computer: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SelectError> {
        let index = empty_indices(board)
            .choose(rng)
            .copied()
            .ok_or(SelectError::NoMoves)?;
        debug!(index, "Random move chosen");
        Ok(index)
    }
}
