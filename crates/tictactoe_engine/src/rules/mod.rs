//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are separated from board storage
//! so the session and the search share the same definitions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, winning_line};

use crate::{Board, GameOutcome, InvalidMove, Player};
use tracing::{instrument, trace};

/// Returns a copy of `board` with `player`'s mark at `index`.
///
/// The input board is left untouched, so a refused move can never
/// corrupt the caller's state.
///
/// # Errors
///
/// Returns [`InvalidMove::OutOfRange`] if `index` is not in 0-8 and
/// [`InvalidMove::Occupied`] if the square already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, InvalidMove> {
    if index >= Board::SIZE {
        return Err(InvalidMove::OutOfRange(index));
    }
    if !board.is_empty(index) {
        return Err(InvalidMove::Occupied(index));
    }

    let mut next = *board;
    next.place(index, player);
    trace!(index, %player, "Mark placed");
    Ok(next)
}

/// Evaluates the board: a win, a draw, or still in progress.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board) -> GameOutcome {
    if let Some(player) = check_winner(board) {
        GameOutcome::Win(player)
    } else if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Indices of the empty squares, ascending.
pub fn empty_indices(board: &Board) -> Vec<usize> {
    (0..Board::SIZE).filter(|&i| board.is_empty(i)).collect()
}
