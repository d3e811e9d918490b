//! Win detection logic for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// The eight winning lines as board index triples.
///
/// Rows first, then columns, then the two diagonals. Callers that report
/// "the" winning line rely on this order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line in [`WIN_LINES`] held entirely by one player.
pub fn winning_line(board: &Board) -> Option<([usize; 3], Player)> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a)?.player()?;
        let held = |i: usize| board.get(i).and_then(|s| s.player()) == Some(player);
        (held(b) && held(c)).then_some(([a, b, c], player))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
