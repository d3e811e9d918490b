//! Hard difficulty: exhaustive minimax search.
//!
//! The search walks the whole remaining game tree on a scratch copy of the
//! board, placing and clearing marks as it recurses. Nine plies at most, so
//! no pruning or caching is needed.

use super::{MoveSelector, SelectError};
use crate::rules::{check_outcome, empty_indices};
use crate::{Board, GameOutcome, Player};
use rand::RngCore;
use tracing::{debug, instrument};

/// Value of a position for the computer.
///
/// `score` is the game-theoretic outcome: +1 computer win, -1 opponent win,
/// 0 draw. `plies` counts the moves from the searched position to the end
/// of the principal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Evaluation {
    score: i8,
    plies: u8,
}

impl Evaluation {
    const WORST: Evaluation = Evaluation { score: -1, plies: 0 };
    const BEST: Evaluation = Evaluation { score: 1, plies: 0 };

    /// Total order used by the search.
    ///
    /// The sign always equals `score`, so a better outcome always wins.
    /// Wins and draws carry no depth discount. Losses are ranked by length
    /// only, so a lost position is played out as long as possible.
    fn rank(self) -> i16 {
        match self.score {
            s if s > 0 => 100,
            s if s < 0 => i16::from(self.plies) - 100,
            _ => 0,
        }
    }
}

/// Perfect play by full game-tree search.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSelector;

impl MoveSelector for MinimaxSelector {
    /// Scans empty squares in ascending order. A later square replaces the
    /// current best only when it is strictly better, so ties go to the
    /// lowest index.
    #[instrument(skip(self, board, _rng))]
    fn select_move(
        &self,
        board: &Board,
        computer: Player,
        _rng: &mut dyn RngCore,
    ) -> Result<usize, SelectError> {
        let mut scratch = *board;
        let mut nodes = 0u64;
        let mut best: Option<(usize, Evaluation)> = None;

        for index in empty_indices(board) {
            scratch.place(index, computer);
            let eval = minimax(&mut scratch, computer, computer.opponent(), 1, &mut nodes);
            scratch.clear(index);

            if best.is_none_or(|(_, current)| eval.rank() > current.rank()) {
                best = Some((index, eval));
            }
        }

        let (index, eval) = best.ok_or(SelectError::NoMoves)?;
        debug!(index, score = eval.score, plies = eval.plies, nodes, "Minimax move chosen");
        Ok(index)
    }
}

/// Recursive minimax. The computer maximizes, its opponent minimizes.
fn minimax(
    board: &mut Board,
    computer: Player,
    to_move: Player,
    plies: u8,
    nodes: &mut u64,
) -> Evaluation {
    *nodes += 1;

    match check_outcome(board) {
        GameOutcome::Win(winner) => {
            let score = if winner == computer { 1 } else { -1 };
            return Evaluation { score, plies };
        }
        GameOutcome::Draw => return Evaluation { score: 0, plies },
        GameOutcome::InProgress => {}
    }

    let maximizing = to_move == computer;
    let mut best = if maximizing {
        Evaluation::WORST
    } else {
        Evaluation::BEST
    };

    for index in 0..Board::SIZE {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, to_move);
        let eval = minimax(board, computer, to_move.opponent(), plies + 1, nodes);
        board.clear(index);

        let better = if maximizing {
            eval.rank() > best.rank()
        } else {
            eval.rank() < best.rank()
        };
        if better {
            best = eval;
        }
    }

    best
}
