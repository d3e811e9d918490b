//! Tic-tac-toe rules and computer opponents.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] ([`apply_move`],
//!   [`check_outcome`], [`empty_indices`])
//! - **Selectors**: computer strategies behind [`MoveSelector`], one per
//!   [`Difficulty`]
//! - **Session**: [`GameSession`], the state a frontend owns and drives
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, GameMode, GameSession, Player, SessionConfig};
//!
//! let config = SessionConfig {
//!     mode: GameMode::HumanVsComputer,
//!     difficulty: Difficulty::Hard,
//!     computer: Player::O,
//! };
//! let mut session = GameSession::seeded(config, 42);
//! session.restart_with(Player::X);
//!
//! session.play(4).unwrap();
//! assert!(session.is_computer_turn());
//! let (index, _) = session.play_computer().unwrap();
//! assert_ne!(index, 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
pub mod selector;
mod session;
mod types;

pub use action::{InvalidMove, Move};
pub use position::Position;
pub use rules::{WIN_LINES, apply_move, check_outcome, empty_indices};
pub use selector::{
    BlockingSelector, Difficulty, MinimaxSelector, MoveSelector, RandomSelector,
    SelectError,
};
pub use session::{GameMode, GameSession, Input, Notification, SessionConfig, SessionError};
pub use types::{Board, GameOutcome, ParseBoardError, Player, Square};
