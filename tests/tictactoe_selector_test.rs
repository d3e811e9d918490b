//! Tests for the computer opponents.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{
    BlockingSelector, Board, Difficulty, GameOutcome, MinimaxSelector, MoveSelector, Player,
    RandomSelector, SelectError, apply_move, check_outcome, empty_indices,
};

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Plays every line the opponent could choose against `computer`'s
/// selector and asserts the computer never loses.
fn assert_never_loses(
    selector: &dyn MoveSelector,
    board: Board,
    to_move: Player,
    computer: Player,
    rng: &mut ChaCha8Rng,
) -> u32 {
    match check_outcome(&board) {
        GameOutcome::Win(winner) => {
            assert_eq!(winner, computer, "computer lost:\n{}", board.display());
            1
        }
        GameOutcome::Draw => 1,
        GameOutcome::InProgress if to_move == computer => {
            let index = selector.select_move(&board, computer, rng).unwrap();
            let next = apply_move(&board, index, computer).unwrap();
            assert_never_loses(selector, next, to_move.opponent(), computer, rng)
        }
        GameOutcome::InProgress => empty_indices(&board)
            .into_iter()
            .map(|index| {
                let next = apply_move(&board, index, to_move).unwrap();
                assert_never_loses(selector, next, to_move.opponent(), computer, rng)
            })
            .sum(),
    }
}

#[test]
fn test_easy_picks_empty_square() {
    let b = board("XO_ _X_ O__");
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let index = RandomSelector.select_move(&b, Player::O, &mut rng).unwrap();
        assert!(b.is_empty(index));
    }
}

#[test]
fn test_easy_reaches_every_empty_square() {
    let b = board("X__ _O_ __X");
    let mut seen = [false; 9];
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
        seen[Difficulty::Easy.select_move(&b, Player::O, &mut rng).unwrap()] = true;
    }
    for index in empty_indices(&b) {
        assert!(seen[index], "index {index} never chosen");
    }
}

#[test]
fn test_medium_blocks_threat() {
    let b = board("XX_ _O_ ___");
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        assert_eq!(Difficulty::Medium.select_move(&b, Player::O, &mut rng), Ok(2));
    }
}

#[test]
fn test_medium_blocks_for_either_mark() {
    let b = board("OX_ OX_ ___");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    // As X, block O's column 0.
    assert_eq!(BlockingSelector.select_move(&b, Player::X, &mut rng), Ok(6));
    // As O, block X's column 1.
    assert_eq!(BlockingSelector.select_move(&b, Player::O, &mut rng), Ok(7));
}

#[test]
fn test_medium_does_not_seek_own_win() {
    // O can win at 2, X has no open two-in-a-row.
    let b = board("OO_ X__ X__");
    let picks: Vec<usize> = (0..50)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            BlockingSelector.select_move(&b, Player::O, &mut rng).unwrap()
        })
        .collect();
    assert!(picks.iter().all(|&i| b.is_empty(i)));
    assert!(picks.iter().any(|&i| i != 2));
}

#[test]
fn test_hard_blocks_diagonal() {
    let b = board("X__ _X_ ___");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(Difficulty::Hard.select_move(&b, Player::O, &mut rng), Ok(8));
}

#[test]
fn test_hard_takes_win_over_block() {
    // O to move: 5 wins now, 2 would only block and draw.
    let b = board("XX_ OO_ X__");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(MinimaxSelector.select_move(&b, Player::O, &mut rng), Ok(5));
}

#[test]
fn test_hard_plays_lowest_forced_win() {
    // 6 and 8 win immediately; 5 forks and wins a round later.
    let b = board("XOX OX_ _O_");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(MinimaxSelector.select_move(&b, Player::X, &mut rng), Ok(5));

    let next = apply_move(&b, 5, Player::X).unwrap();
    let reply = MinimaxSelector.select_move(&next, Player::O, &mut rng).unwrap();
    let next = apply_move(&next, reply, Player::O).unwrap();
    let finish = MinimaxSelector.select_move(&next, Player::X, &mut rng).unwrap();
    let last = apply_move(&next, finish, Player::X).unwrap();
    assert_eq!(check_outcome(&last), GameOutcome::Win(Player::X));
}

#[test]
fn test_hard_opening_is_lowest_index() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        MinimaxSelector.select_move(&Board::new(), Player::X, &mut rng),
        Ok(0)
    );
}

#[test]
fn test_hard_ignores_rng() {
    let b = board("X__ ___ __O");
    let picks: Vec<usize> = (0..5)
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            MinimaxSelector.select_move(&b, Player::X, &mut rng).unwrap()
        })
        .collect();
    assert!(picks.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_hard_vs_hard_draws() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for first in [Player::X, Player::O] {
        let mut b = Board::new();
        let mut to_move = first;
        while !check_outcome(&b).is_terminal() {
            let index = MinimaxSelector.select_move(&b, to_move, &mut rng).unwrap();
            b = apply_move(&b, index, to_move).unwrap();
            to_move = to_move.opponent();
        }
        assert_eq!(check_outcome(&b), GameOutcome::Draw, "\n{}", b.display());
    }
}

#[test]
fn test_hard_never_loses_moving_second() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for computer in [Player::X, Player::O] {
        let games = assert_never_loses(
            &MinimaxSelector,
            Board::new(),
            computer.opponent(),
            computer,
            &mut rng,
        );
        assert!(games > 0);
    }
}

#[test]
fn test_hard_never_loses_moving_first() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for computer in [Player::X, Player::O] {
        let games =
            assert_never_loses(&MinimaxSelector, Board::new(), computer, computer, &mut rng);
        assert!(games > 0);
    }
}

#[test]
fn test_no_moves_on_full_board() {
    let b = board("XOX XOO OXX");
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(
            difficulty.select_move(&b, Player::X, &mut rng),
            Err(SelectError::NoMoves)
        );
    }
}

#[test]
fn test_selectors_leave_board_untouched() {
    let b = board("X__ _O_ __X");
    let before = b;
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        difficulty.select_move(&b, Player::O, &mut rng).unwrap();
        assert_eq!(b, before);
    }
}
