//! Tests for the game session lifecycle.

use rand::{SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{
    Board, Difficulty, GameMode, GameOutcome, GameSession, Input, Notification, Player,
    SessionConfig, SessionError, empty_indices,
};

fn config(mode: GameMode, difficulty: Difficulty) -> SessionConfig {
    SessionConfig {
        mode,
        difficulty,
        computer: Player::O,
    }
}

#[test]
fn test_starting_player_varies_with_seed() {
    let firsts: Vec<Player> = (0..64)
        .map(|seed| {
            GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Easy), seed)
                .current_player()
        })
        .collect();
    assert!(firsts.contains(&Player::X));
    assert!(firsts.contains(&Player::O));
}

#[test]
fn test_same_seed_same_start() {
    for seed in 0..10 {
        let cfg = config(GameMode::HumanVsComputer, Difficulty::Medium);
        let a = GameSession::seeded(cfg, seed);
        let b = GameSession::seeded(cfg, seed);
        assert_eq!(a.current_player(), b.current_player());
    }
}

#[test]
fn test_handle_cell_activation() {
    let mut session = GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Easy), 0);
    session.restart_with(Player::X);

    let notes = session.handle(Input::CellActivated(4));
    assert_eq!(
        notes,
        vec![
            Notification::CellMarked {
                index: 4,
                player: Player::X
            },
            Notification::StatusChanged("O's turn".to_string()),
        ]
    );

    // Occupied cell: nothing happens.
    assert!(session.handle(Input::CellActivated(4)).is_empty());
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_handle_win_and_refuse_after() {
    let mut session = GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Easy), 0);
    session.restart_with(Player::O);
    for index in [0, 3, 1, 4] {
        session.handle(Input::CellActivated(index));
    }

    let notes = session.handle(Input::CellActivated(2));
    assert_eq!(
        notes.last(),
        Some(&Notification::RunningChanged(false)),
        "{notes:?}"
    );
    assert!(notes.contains(&Notification::StatusChanged(
        "O wins! Congratulations!".to_string()
    )));
    assert_eq!(session.outcome(), GameOutcome::Win(Player::O));

    let board = *session.board();
    assert!(session.handle(Input::CellActivated(8)).is_empty());
    assert_eq!(*session.board(), board);
}

#[test]
fn test_handle_restart() {
    let mut session = GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Easy), 2);
    session.handle(Input::CellActivated(0));

    let notes = session.handle(Input::RestartRequested);
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0], Notification::BoardCleared);
    assert_eq!(
        notes[1],
        Notification::StatusChanged(format!("{}'s turn", session.current_player()))
    );
    assert_eq!(notes[2], Notification::RunningChanged(true));
    assert_eq!(*session.board(), Board::new());
    assert!(session.is_running());
}

#[test]
fn test_settings_change_keeps_game() {
    let mut session = GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Easy), 4);
    session.restart_with(Player::X);
    session.play(0).unwrap();

    assert!(session.handle(Input::ModeChanged(GameMode::HumanVsComputer)).is_empty());
    assert!(session.handle(Input::DifficultyChanged(Difficulty::Hard)).is_empty());
    assert_eq!(session.mode(), GameMode::HumanVsComputer);
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.history().len(), 1);
    // O is the computer and O is to move.
    assert!(session.is_computer_turn());
}

#[test]
fn test_computer_turn_rules() {
    let mut session =
        GameSession::seeded(config(GameMode::HumanVsComputer, Difficulty::Hard), 7);
    session.restart_with(Player::X);
    assert!(!session.is_computer_turn());
    assert_eq!(session.play_computer(), Err(SessionError::NotComputerTurn));

    session.play(0).unwrap();
    assert!(session.is_computer_turn());
    assert_eq!(session.play(1), Err(SessionError::ComputerTurn));
    assert!(session.handle(Input::CellActivated(1)).is_empty());

    let (index, outcome) = session.play_computer().unwrap();
    assert_eq!(index, 4);
    assert_eq!(outcome, GameOutcome::InProgress);
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_computer_due_input() {
    let mut session =
        GameSession::seeded(config(GameMode::HumanVsComputer, Difficulty::Medium), 8);
    session.restart_with(Player::O);

    let notes = session.handle(Input::ComputerTurnDue);
    assert!(matches!(
        notes.first(),
        Some(Notification::CellMarked {
            player: Player::O,
            ..
        })
    ));
    // Not the computer's turn any more: ignored.
    assert!(session.handle(Input::ComputerTurnDue).is_empty());
}

#[test]
fn test_human_vs_human_never_computer_turn() {
    let mut session = GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Hard), 3);
    for index in [4, 0, 8] {
        assert!(!session.is_computer_turn());
        session.play(index).unwrap();
    }
    assert_eq!(session.play_computer(), Err(SessionError::NotComputerTurn));
}

#[test]
fn test_hard_session_never_loses_to_random_human() {
    let mut human = ChaCha8Rng::seed_from_u64(11);
    for seed in 0..30 {
        let mut session =
            GameSession::seeded(config(GameMode::HumanVsComputer, Difficulty::Hard), seed);
        while session.is_running() {
            if session.is_computer_turn() {
                session.play_computer().unwrap();
            } else {
                let choices = empty_indices(session.board());
                let index = *choices.choose(&mut human).unwrap();
                session.play(index).unwrap();
            }
            session.check_invariants().unwrap();
        }
        assert_ne!(session.outcome(), GameOutcome::Win(Player::X), "seed {seed}");
        assert!(session.history().len() <= 9);
    }
}

#[test]
fn test_history_records_moves() {
    let mut session = GameSession::seeded(config(GameMode::HumanVsHuman, Difficulty::Easy), 0);
    session.restart_with(Player::X);
    for index in [4, 0, 8] {
        session.play(index).unwrap();
    }
    let played: Vec<(Player, usize)> = session
        .history()
        .iter()
        .map(|m| (m.player(), m.position().to_index()))
        .collect();
    assert_eq!(
        played,
        vec![(Player::X, 4), (Player::O, 0), (Player::X, 8)]
    );
}
