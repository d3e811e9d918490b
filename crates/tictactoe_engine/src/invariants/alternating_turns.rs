//! Alternating turn invariant: players take turns.

use super::Invariant;
use crate::{GameOutcome, GameSession};

/// Invariant: consecutive moves are made by opposite players, and while the
/// game runs the player to move is the one who did not move last.
pub struct AlternatingTurns;

impl<R> Invariant<GameSession<R>> for AlternatingTurns {
    fn holds(session: &GameSession<R>) -> bool {
        let history = session.history();

        let alternates = history
            .windows(2)
            .all(|pair| pair[0].player != pair[1].player);

        let to_move_ok = match (session.outcome(), history.last()) {
            (GameOutcome::InProgress, Some(last)) => session.current_player() != last.player,
            _ => true,
        };

        alternates && to_move_ok
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
