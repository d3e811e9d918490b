//! Application state and logic.

use super::input::{Action, action_for};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tictactoe_engine::{GameSession, Input, Notification, Position};
use tracing::{debug, info};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the app.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    think_delay: Duration,
    computer_due: Option<Instant>,
    last_event: String,
}

impl App {
    /// Creates a new application around a started session.
    pub fn new(session: GameSession, think_delay: Duration) -> Self {
        Self {
            session,
            cursor: Position::Center,
            think_delay,
            computer_due: None,
            last_event: String::new(),
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets a description of the last move played.
    pub fn last_event(&self) -> &str {
        &self.last_event
    }

    /// Whether the computer is waiting out its thinking delay.
    pub fn is_thinking(&self) -> bool {
        self.computer_due.is_some()
    }

    /// The status line: the session's message, or a thinking notice.
    pub fn status_message(&self) -> String {
        if self.is_thinking() {
            format!("{} is thinking...", self.session.computer())
        } else {
            self.session.status_message()
        }
    }

    /// Advances timers. Schedules the computer's move when it is its turn
    /// and plays it once the delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if !self.session.is_computer_turn() {
            self.computer_due = None;
            return;
        }

        match self.computer_due {
            None => {
                debug!(delay_ms = self.think_delay.as_millis() as u64, "Computer turn scheduled");
                self.computer_due = Some(now + self.think_delay);
            }
            Some(due) if now >= due => {
                self.computer_due = None;
                let notes = self.session.handle(Input::ComputerTurnDue);
                self.absorb(notes);
            }
            Some(_) => {}
        }
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: KeyCode) -> Control {
        let Some(action) = action_for(self.cursor, key) else {
            return Control::Continue;
        };
        debug!(?action, "Key action");

        let input = match action {
            Action::MoveCursor(pos) => {
                self.cursor = pos;
                return Control::Continue;
            }
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
            Action::Activate(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                Input::CellActivated(index)
            }
            Action::ToggleMode => Input::ModeChanged(self.session.mode().toggle()),
            Action::CycleDifficulty => Input::DifficultyChanged(self.session.difficulty().next()),
            Action::Restart => {
                self.computer_due = None;
                Input::RestartRequested
            }
        };

        let notes = self.session.handle(input);
        self.absorb(notes);
        Control::Continue
    }

    fn absorb(&mut self, notes: Vec<Notification>) {
        for note in notes {
            debug!(?note, "Session notification");
            match note {
                Notification::CellMarked { index, player } => {
                    let label = Position::from_index(index).map_or("?", |p| p.label());
                    self.last_event = format!("{player} played {label}");
                }
                Notification::BoardCleared => self.last_event.clear(),
                Notification::StatusChanged(_) | Notification::RunningChanged(_) => {}
            }
        }
    }
}
