//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameSession, Square};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must write each square
/// at most once and reproduce the current board exactly.
pub struct MonotonicBoard;

impl<R> Invariant<GameSession<R>> for MonotonicBoard {
    fn holds(session: &GameSession<R>) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            let index = mov.position.to_index();
            if reconstructed.get(index) != Some(Square::Empty) {
                return false;
            }
            reconstructed.place(index, mov.player);
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
