//! Gomoku-specific tests for the alpha-beta search.
//!
//! Test coverage:
//! - Completing an open four
//! - Blocking the opponent's four
//! - Finished boards and boards without candidates
//! - Pruning and root fan-out agree with plain sequential minimax

use crate::alpha_beta_searcher::{
    GameMove, SearchConfig, SearchContext, SearchError, DRAW_SCORE, WIN_SCORE,
};
use crate::board::{Board, BoardError, Coordinate, GameConfig, Player, Radius};

use super::*;

fn board(size: usize, radius: Radius, moves: &[(usize, usize)]) -> Board {
    let mut board = Board::new(GameConfig::new(size, radius).unwrap());
    for &(x, y) in moves {
        board.try_apply_move(x, y).unwrap();
    }
    board
}

fn context(max_depth: u8, parallelism: usize, pruning: bool) -> SearchContext {
    SearchContext::new(SearchConfig {
        max_depth,
        parallelism,
        pruning,
    })
    .unwrap()
}

/// Player one has an open four on the `x = 7` column and is to move.
fn open_four() -> Board {
    board(
        15,
        Radius::Unlimited,
        &[
            (7, 7),
            (0, 0),
            (7, 8),
            (0, 2),
            (7, 9),
            (0, 4),
            (7, 10),
            (0, 6),
        ],
    )
}

#[test]
fn test_completes_an_open_four() {
    let board = open_four();
    println!("Testing board:\n{}", board);
    let winning_moves = [Coordinate::new(7, 6), Coordinate::new(7, 11)];

    for &depth in &[1, 2] {
        let outcome = search_best_move(&mut context(depth, 0, true), &board).unwrap();
        let best_move = outcome.best_move.expect("a running game has a move");
        assert!(
            winning_moves.contains(&best_move),
            "{} does not complete the five at depth {}",
            best_move,
            depth
        );
        assert_eq!(outcome.score, WIN_SCORE);
    }
}

#[test]
fn test_blocks_a_closed_four() {
    let board = board(
        9,
        Radius::Unlimited,
        &[(4, 1), (4, 0), (4, 2), (0, 8), (4, 3), (8, 8), (4, 4)],
    );
    println!("Testing board:\n{}", board);
    assert_eq!(board.current_player(), Player::Two);

    let outcome = search_best_move(&mut context(2, 1, true), &board).unwrap();
    assert_eq!(outcome.best_move, Some(Coordinate::new(4, 5)));
    assert!(outcome.score > -WIN_SCORE);
}

#[test]
fn test_finished_board_returns_no_move() {
    let mut board = open_four();
    board.apply_move(7, 11);
    assert!(board.is_over());

    let outcome = search_best_move(&mut context(3, 1, true), &board).unwrap();
    assert_eq!(outcome.best_move, None);
    // the winner keeps the turn, so the player to move is the winner
    assert_eq!(outcome.score, WIN_SCORE);
}

#[test]
fn test_no_candidates_returns_neutral_score() {
    let board = board(5, Radius::Limited(0), &[(2, 2)]);

    let outcome = search_best_move(&mut context(2, 1, true), &board).unwrap();
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, DRAW_SCORE);
}

#[test]
fn test_search_does_not_change_the_board() {
    let board = board(9, Radius::Limited(2), &[(4, 4), (4, 5), (5, 5)]);
    let before = board.clone();

    search_best_move(&mut context(3, 0, true), &board).unwrap();
    assert_eq!(before, board);
}

#[test]
fn test_pruning_matches_minimax() {
    let positions = [
        board(6, Radius::Unlimited, &[(2, 2), (3, 3)]),
        board(6, Radius::Unlimited, &[(2, 2), (2, 3), (3, 2), (4, 1)]),
        board(7, Radius::Limited(2), &[(3, 3), (3, 4), (4, 4)]),
    ];

    for board in positions.iter() {
        for depth in 1..=2 {
            let pruned = search_best_move(&mut context(depth, 1, true), board).unwrap();
            let unpruned = search_best_move(&mut context(depth, 1, false), board).unwrap();
            assert_eq!(pruned, unpruned, "depth {} on\n{}", depth, board);
        }
    }

    let board = &positions[2];
    let pruned = search_best_move(&mut context(3, 1, true), board).unwrap();
    let unpruned = search_best_move(&mut context(3, 1, false), board).unwrap();
    assert_eq!(pruned, unpruned, "depth 3 on\n{}", board);
}

#[test]
fn test_root_fan_out_is_deterministic() {
    let board = board(
        9,
        Radius::Unlimited,
        &[(4, 4), (4, 5), (5, 5), (3, 3), (5, 4)],
    );

    let sequential = search_best_move(&mut context(2, 1, true), &board).unwrap();
    let parallel = search_best_move(&mut context(2, 0, true), &board).unwrap();
    assert_eq!(sequential, parallel);

    let mut fan_out = context(2, 0, true);
    let again = search_best_move(&mut fan_out, &board).unwrap();
    assert_eq!(parallel, again);
    assert!(fan_out.searched_position_count() > 1);
}

#[test]
fn test_undo_must_match_the_last_move() {
    let mut board = board(9, Radius::Unlimited, &[(1, 1)]);

    let result = Coordinate::new(2, 2).undo(&mut board);
    assert_eq!(
        result,
        Err(BoardError::UndoMismatch {
            expected: Coordinate::new(2, 2),
            found: Coordinate::new(1, 1),
        })
    );
    assert_eq!(board.history(), &[Coordinate::new(1, 1)]);
    assert_eq!(board.current_player(), Player::Two);

    let mut board = Board::default();
    assert_eq!(
        Coordinate::new(7, 7).undo(&mut board),
        Err(BoardError::NothingToUndo)
    );
}

#[test]
fn test_search_reports_configuration_errors() {
    let result = SearchContext::new(SearchConfig {
        max_depth: 0,
        ..SearchConfig::default()
    });
    assert!(matches!(result, Err(SearchError::DepthTooLow)));
}
