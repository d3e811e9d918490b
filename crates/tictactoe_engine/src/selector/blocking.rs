//! Medium difficulty: block the opponent's immediate win.

use super::{MoveSelector, RandomSelector, SelectError};
use crate::rules::WIN_LINES;
use crate::{Board, Player, Square};
use rand::RngCore;
use tracing::{debug, instrument};

/// Blocks a line the opponent is one mark away from completing.
///
/// Lines are scanned in [`WIN_LINES`] order and the first threat found is
/// blocked. Without a threat the move is random. The selector never looks
/// for its own winning square.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingSelector;

impl BlockingSelector {
    /// The square that stops `opponent` completing a line, if any.
    pub fn find_block(board: &Board, opponent: Player) -> Option<usize> {
        WIN_LINES.iter().find_map(|line| {
            let held = line
                .iter()
                .filter(|&&i| board.get(i) == Some(Square::Occupied(opponent)))
                .count();
            if held == 2 {
                line.iter().copied().find(|&i| board.is_empty(i))
            } else {
                None
            }
        })
    }
}

impl MoveSelector for BlockingSelector {
    #[instrument(skip(self, board, rng))]
    fn select_move(
        &self,
        board: &Board,
        computer: Player,
        rng: &mut dyn RngCore,
    ) -> Result<usize, SelectError> {
        if let Some(index) = Self::find_block(board, computer.opponent()) {
            debug!(index, "Blocking opponent line");
            return Ok(index);
        }
        RandomSelector.select_move(board, computer, rng)
    }
}
