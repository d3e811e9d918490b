//! Game session: the explicit state a frontend owns and drives.
//!
//! A session holds the board, whose turn it is, whether the game still
//! accepts moves, and the mode and difficulty settings. Frontends call
//! [`GameSession::play`] for human input, [`GameSession::play_computer`]
//! when [`GameSession::is_computer_turn`] says so, and render from the
//! accessors. [`GameSession::handle`] wraps the same calls in an
//! input-event / notification interface.

use crate::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use crate::rules::{apply_move, check_outcome};
use crate::selector::{Difficulty, MoveSelector, SelectError};
use crate::{Board, GameOutcome, InvalidMove, Move, Player, Position};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who sits across the board.
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
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(rename = "multi", alias = "multiplayer")]
    #[strum(to_string = "multi", serialize = "multiplayer")]
    HumanVsHuman,
    /// A human plays the computer.
    #[default]
    #[serde(rename = "single", alias = "single-player")]
    #[strum(to_string = "single", serialize = "single-player")]
    HumanVsComputer,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Switches between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

/// Settings a session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Human vs human or human vs computer.
    pub mode: GameMode,
    /// Computer strength, consulted only against the computer.
    pub difficulty: Difficulty,
    /// The mark the computer plays.
    pub computer: Player,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsComputer,
            difficulty: Difficulty::Easy,
            computer: Player::O,
        }
    }
}

/// Events a frontend feeds into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// The user activated the cell at this index.
    CellActivated(usize),
    /// The frontend's thinking delay elapsed; the computer should move.
    ComputerTurnDue,
    /// The user picked a mode.
    ModeChanged(GameMode),
    /// The user picked a difficulty.
    DifficultyChanged(Difficulty),
    /// The user asked for a new game.
    RestartRequested,
}

/// State changes a frontend should reflect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A mark now occupies this cell.
    CellMarked {
        /// Board index of the cell.
        index: usize,
        /// The mark placed.
        player: Player,
    },
    /// Every cell is empty again.
    BoardCleared,
    /// The status line text changed.
    StatusChanged(String),
    /// Whether the board accepts input changed.
    RunningChanged(bool),
}

/// A session refused an operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The game has finished; restart to play again.
    #[display("Game is already over")]
    GameOver,

    /// A human tried to move while the computer is to play.
    #[display("It's the computer's turn")]
    ComputerTurn,

    /// The computer was asked to move out of turn.
    #[display("It's not the computer's turn")]
    NotComputerTurn,

    /// The rules refused the move.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// The computer could not choose a move.
    #[display("Move selection failed: {}", _0)]
    Select(SelectError),

    /// A session invariant broke after a move.
    #[display("{}", _0)]
    InvariantViolation(InvariantViolation),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidMove(e) => Some(e),
            SessionError::Select(e) => Some(e),
            SessionError::InvariantViolation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidMove> for SessionError {
    fn from(err: InvalidMove) -> Self {
        SessionError::InvalidMove(err)
    }
}

impl From<SelectError> for SessionError {
    fn from(err: SelectError) -> Self {
        SessionError::Select(err)
    }
}

/// One game of tic-tac-toe plus its settings.
///
/// `R` is the random source used for the starting player and for the
/// easy and medium strategies. Seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct GameSession<R = ChaCha8Rng> {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) outcome: GameOutcome,
    pub(crate) running: bool,
    pub(crate) mode: GameMode,
    pub(crate) difficulty: Difficulty,
    pub(crate) computer: Player,
    pub(crate) history: Vec<Move>,
    rng: R,
}

impl GameSession<ChaCha8Rng> {
    /// Creates a session whose randomness is fixed by `seed`.
    pub fn seeded(config: SessionConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a session seeded from the operating system.
    pub fn from_entropy(config: SessionConfig) -> Self {
        Self::new(config, ChaCha8Rng::from_entropy())
    }
}

impl<R: RngCore> GameSession<R> {
    /// Creates a session and starts the first game.
    #[instrument(skip(rng))]
    pub fn new(config: SessionConfig, rng: R) -> Self {
        let mut session = Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: GameOutcome::InProgress,
            running: false,
            mode: config.mode,
            difficulty: config.difficulty,
            computer: config.computer,
            history: Vec::new(),
            rng,
        };
        session.restart();
        session
    }

    /// Starts a new game with a uniformly random first player.
    ///
    /// Returns the player who moves first.
    pub fn restart(&mut self) -> Player {
        let first = if self.rng.gen_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        self.restart_with(first);
        first
    }

    /// Starts a new game with the given first player.
    #[instrument(skip(self))]
    pub fn restart_with(&mut self, first: Player) {
        self.board = Board::new();
        self.current_player = first;
        self.outcome = GameOutcome::InProgress;
        self.running = true;
        self.history.clear();
        info!(%first, mode = %self.mode, difficulty = %self.difficulty, "New game started");
    }

    /// Plays a human move for the player to move.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] once the game has finished.
    /// - [`SessionError::ComputerTurn`] when the computer is to move.
    /// - [`SessionError::InvalidMove`] for an out-of-range or occupied cell.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        if !self.running {
            warn!(index, "Move after game over");
            return Err(SessionError::GameOver);
        }
        if self.is_computer_turn() {
            warn!(index, "Human move during computer turn");
            return Err(SessionError::ComputerTurn);
        }
        self.commit(index)
    }

    /// Lets the computer choose and play its move.
    ///
    /// Returns the chosen index and the resulting outcome.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotComputerTurn`] unless [`Self::is_computer_turn`].
    #[instrument(skip(self), fields(difficulty = %self.difficulty, computer = %self.computer))]
    pub fn play_computer(&mut self) -> Result<(usize, GameOutcome), SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        let index = self
            .difficulty
            .select_move(&self.board, self.computer, &mut self.rng)?;
        debug!(index, "Computer selected move");
        let outcome = self.commit(index)?;
        Ok((index, outcome))
    }

    /// Applies a validated move for the player to move and advances state.
    fn commit(&mut self, index: usize) -> Result<GameOutcome, SessionError> {
        let player = self.current_player;
        let next = apply_move(&self.board, index, player).inspect_err(|e| {
            warn!(index, error = %e, "Move refused");
        })?;
        let position = Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))?;

        self.board = next;
        self.history.push(Move::new(player, position));
        self.outcome = check_outcome(&self.board);

        if self.outcome.is_terminal() {
            self.running = false;
            info!(outcome = ?self.outcome, moves = self.history.len(), "Game finished");
        } else {
            self.current_player = player.opponent();
        }

        if cfg!(debug_assertions) {
            self.check_invariants()?;
        }

        Ok(self.outcome)
    }

    /// Feeds an input event and returns what changed.
    ///
    /// Refused cell activations are ignored: they change nothing and
    /// produce no notifications.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Vec<Notification> {
        match input {
            Input::CellActivated(index) => {
                let player = self.current_player;
                match self.play(index) {
                    Ok(_) => self.after_move(index, player),
                    Err(e) => {
                        debug!(index, error = %e, "Cell activation ignored");
                        Vec::new()
                    }
                }
            }
            Input::ComputerTurnDue => {
                let player = self.computer;
                match self.play_computer() {
                    Ok((index, _)) => self.after_move(index, player),
                    Err(e) => {
                        debug!(error = %e, "Computer turn skipped");
                        Vec::new()
                    }
                }
            }
            Input::ModeChanged(mode) => {
                self.set_mode(mode);
                Vec::new()
            }
            Input::DifficultyChanged(difficulty) => {
                self.set_difficulty(difficulty);
                Vec::new()
            }
            Input::RestartRequested => {
                self.restart();
                vec![
                    Notification::BoardCleared,
                    Notification::StatusChanged(self.status_message()),
                    Notification::RunningChanged(true),
                ]
            }
        }
    }

    fn after_move(&self, index: usize, player: Player) -> Vec<Notification> {
        let mut notes = vec![
            Notification::CellMarked { index, player },
            Notification::StatusChanged(self.status_message()),
        ];
        if !self.running {
            notes.push(Notification::RunningChanged(false));
        }
        notes
    }

    /// Changes the mode; the current game continues.
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode != self.mode {
            info!(from = %self.mode, to = %mode, "Mode changed");
            self.mode = mode;
        }
    }

    /// Changes the difficulty; takes effect on the computer's next move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            info!(from = %self.difficulty, to = %difficulty, "Difficulty changed");
            self.difficulty = difficulty;
        }
    }
}

impl<R> GameSession<R> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome so far.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Whether the board accepts moves.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Returns the moves played since the last restart.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the frontend should schedule a computer move.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::HumanVsComputer
            && self.running
            && self.current_player == self.computer
    }

    /// The status line for the current state.
    pub fn status_message(&self) -> String {
        match self.outcome {
            GameOutcome::Win(player) => format!("{player} wins! Congratulations!"),
            GameOutcome::Draw => "It's a tie!".to_string(),
            GameOutcome::InProgress => format!("{}'s turn", self.current_player),
        }
    }

    /// Checks every session invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), SessionError> {
        <SessionInvariants as InvariantSet<Self>>::check_all(self).map_err(|violations| {
            warn!(?violations, "Session invariants violated");
            let first = violations
                .into_iter()
                .next()
                .unwrap_or_else(|| InvariantViolation::new("unknown"));
            SessionError::InvariantViolation(first)
        })
    }
}
