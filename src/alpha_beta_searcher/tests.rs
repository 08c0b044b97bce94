//! Domain-agnostic tests for the alpha-beta search algorithm using Nim.
//!
//! Test coverage:
//! - Basic search functionality (winning moves, losing positions, game completion)
//! - Configuration errors (zero depth, too many threads)
//! - Finished games and positions without moves
//! - Pruning matches plain minimax and visits fewer positions
//! - Parallel vs sequential search consistency

use super::*;

/// State of a Nim game: players take 1-3 objects, last to take wins.
#[derive(Clone, Debug)]
struct NimState {
    pile: u8,
    is_player_one_turn: bool,
}

impl NimState {
    fn new(pile: u8) -> Self {
        Self {
            pile,
            is_player_one_turn: true,
        }
    }
}

impl GameState for NimState {
    type Side = bool;

    fn side_to_move(&self) -> bool {
        self.is_player_one_turn
    }

    fn outcome(&self) -> Option<Outcome<bool>> {
        if self.pile == 0 {
            // the previous player took the last object
            Some(Outcome::Win(!self.is_player_one_turn))
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct NimMove {
    take: u8,
}

impl GameMove for NimMove {
    type State = NimState;
    type Error = &'static str;

    fn apply(&self, state: &mut NimState) -> Result<(), Self::Error> {
        if self.take > state.pile || self.take == 0 || self.take > 3 {
            return Err("Invalid move");
        }
        state.pile -= self.take;
        state.is_player_one_turn = !state.is_player_one_turn;
        Ok(())
    }

    fn undo(&self, state: &mut NimState) -> Result<(), Self::Error> {
        state.pile += self.take;
        state.is_player_one_turn = !state.is_player_one_turn;
        Ok(())
    }
}

#[derive(Clone)]
struct NimMoveGenerator;

impl MoveGenerator<NimState> for NimMoveGenerator {
    type Move = NimMove;

    fn generate_moves(&self, state: &NimState) -> Vec<NimMove> {
        (1..=std::cmp::min(3, state.pile))
            .map(|take| NimMove { take })
            .collect()
    }
}

#[derive(Clone)]
struct NimEvaluator;

impl Evaluator<NimState> for NimEvaluator {
    fn evaluate(&self, state: &NimState) -> i32 {
        // pile % 4 == 0 is a losing position for the player to move
        if state.pile % 4 == 0 {
            -100
        } else {
            100
        }
    }
}

/// Offers moves that cannot be applied.
#[derive(Clone)]
struct GreedyNimMoveGenerator;

impl MoveGenerator<NimState> for GreedyNimMoveGenerator {
    type Move = NimMove;

    fn generate_moves(&self, _state: &NimState) -> Vec<NimMove> {
        vec![NimMove { take: 4 }]
    }
}

fn context(max_depth: u8, parallelism: usize, pruning: bool) -> SearchContext {
    SearchContext::new(SearchConfig {
        max_depth,
        parallelism,
        pruning,
    })
    .unwrap()
}

fn search(context: &mut SearchContext, pile: u8) -> SearchOutcome<NimMove> {
    alpha_beta_search(context, &NimState::new(pile), &NimMoveGenerator, &NimEvaluator).unwrap()
}

#[test]
fn test_default_config() {
    let config = SearchConfig::default();
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.parallelism, 1);
    assert!(config.pruning);
}

#[test]
fn test_nim_finds_winning_move_from_5() {
    let mut context = context(10, 1, true);
    let outcome = search(&mut context, 5);

    assert_eq!(
        outcome.best_move,
        Some(NimMove { take: 1 }),
        "From pile of 5, should take 1 to leave opponent with 4"
    );
    assert_eq!(outcome.score, WIN_SCORE);
}

#[test]
fn test_nim_finds_winning_move_from_6() {
    let mut context = context(10, 1, true);
    let outcome = search(&mut context, 6);

    assert_eq!(
        outcome.best_move,
        Some(NimMove { take: 2 }),
        "From pile of 6, should take 2 to leave opponent with 4"
    );
}

#[test]
fn test_nim_finds_winning_move_from_7() {
    let mut context = context(10, 1, true);
    let outcome = search(&mut context, 7);

    assert_eq!(
        outcome.best_move,
        Some(NimMove { take: 3 }),
        "From pile of 7, should take 3 to leave opponent with 4"
    );
}

#[test]
fn test_nim_takes_the_last_objects_at_depth_1() {
    let mut context = context(1, 1, true);
    let outcome = search(&mut context, 3);

    assert_eq!(outcome.best_move, Some(NimMove { take: 3 }));
    assert_eq!(outcome.score, WIN_SCORE);
}

#[test]
fn test_nim_losing_position() {
    let mut context = context(10, 1, true);
    let outcome = search(&mut context, 4);

    // every move loses, so the first candidate is kept
    assert_eq!(outcome.best_move, Some(NimMove { take: 1 }));
    assert_eq!(outcome.score, -WIN_SCORE);
}

#[test]
fn test_nim_game_to_completion() {
    let mut state = NimState::new(10);
    let mut context = context(10, 1, true);

    while state.outcome().is_none() {
        let outcome =
            alpha_beta_search(&mut context, &state, &NimMoveGenerator, &NimEvaluator).unwrap();
        let best_move = outcome.best_move.expect("a running game has a move");
        best_move.apply(&mut state).unwrap();
    }

    assert_eq!(
        state.outcome(),
        Some(Outcome::Win(true)),
        "Player one should win from pile of 10"
    );
}

#[test]
fn test_horizon_score_follows_the_root_player() {
    // after one ply the opponent is to move on a pile of 4
    let mut context = context(1, 1, true);
    let outcome = search(&mut context, 5);

    assert_eq!(outcome.best_move, Some(NimMove { take: 1 }));
    assert_eq!(outcome.score, 100);
}

#[test]
fn test_search_rejects_zero_depth() {
    let result = SearchContext::new(SearchConfig {
        max_depth: 0,
        ..SearchConfig::default()
    });

    assert!(matches!(result, Err(SearchError::DepthTooLow)));
}

#[test]
fn test_search_rejects_more_threads_than_available() {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let result = SearchContext::new(SearchConfig {
        parallelism: available + 1,
        ..SearchConfig::default()
    });

    match result {
        Err(SearchError::ParallelismUnavailable {
            requested,
            available: reported,
        }) => {
            assert_eq!(requested, available + 1);
            assert_eq!(reported, available);
        }
        Err(error) => panic!("unexpected error: {}", error),
        Ok(_) => panic!("oversubscribed search context should be rejected"),
    }
}

#[test]
fn test_zero_parallelism_uses_every_thread() {
    let context = context(2, 0, true);
    assert!(context.is_parallel());
    assert!(context.worker_count() >= 1);
}

#[test]
fn test_finished_game_returns_terminal_score_without_move() {
    let mut context = context(3, 1, true);
    let outcome = search(&mut context, 0);

    // player one is to move on an empty pile, so player two took the last object
    assert_eq!(
        outcome,
        SearchOutcome {
            best_move: None,
            score: -WIN_SCORE,
        }
    );
}

#[test]
fn test_no_candidates_returns_neutral_score() {
    #[derive(Clone)]
    struct NoMoves;

    impl MoveGenerator<NimState> for NoMoves {
        type Move = NimMove;

        fn generate_moves(&self, _state: &NimState) -> Vec<NimMove> {
            vec![]
        }
    }

    let mut context = context(3, 1, true);
    let outcome =
        alpha_beta_search(&mut context, &NimState::new(5), &NoMoves, &NimEvaluator).unwrap();

    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, DRAW_SCORE);
}

#[test]
fn test_failed_move_is_reported() {
    let mut context = context(2, 1, true);
    let result = alpha_beta_search(
        &mut context,
        &NimState::new(2),
        &GreedyNimMoveGenerator,
        &NimEvaluator,
    );

    assert!(matches!(result, Err(SearchError::MoveApplication { .. })));
}

#[test]
fn test_search_leaves_the_caller_state_untouched() {
    let state = NimState::new(9);
    let mut context = context(4, 1, true);
    alpha_beta_search(&mut context, &state, &NimMoveGenerator, &NimEvaluator).unwrap();

    assert_eq!(state.pile, 9);
    assert!(state.is_player_one_turn);
}

#[test]
fn test_unpruned_search_visits_every_position() {
    // root, piles 2/1/0, then 1/0 below 2 and 0 below 1
    let mut context = context(2, 1, false);
    search(&mut context, 3);

    assert_eq!(context.searched_position_count(), 7);
}

#[test]
fn test_pruning_matches_minimax() {
    for pile in 1..=12 {
        for depth in 1..=4 {
            let pruned = search(&mut context(depth, 1, true), pile);
            let unpruned = search(&mut context(depth, 1, false), pile);
            assert_eq!(
                pruned, unpruned,
                "pile {} at depth {} disagrees with plain minimax",
                pile, depth
            );
        }
    }
}

#[test]
fn test_pruning_visits_fewer_positions() {
    let mut pruned = context(4, 1, true);
    let mut unpruned = context(4, 1, false);
    search(&mut pruned, 12);
    search(&mut unpruned, 12);

    assert!(
        pruned.searched_position_count() < unpruned.searched_position_count(),
        "alpha-beta searched {} positions, minimax {}",
        pruned.searched_position_count(),
        unpruned.searched_position_count()
    );
}

#[test]
fn test_parallel_vs_sequential_same_result() {
    for pile in 1..=12 {
        let sequential_result = search(&mut context(5, 1, true), pile);
        let parallel_result = search(&mut context(5, 0, true), pile);

        assert_eq!(
            sequential_result, parallel_result,
            "Parallel and sequential search should return same move for pile {}",
            pile
        );
    }
}

#[test]
fn test_parallel_search_is_repeatable() {
    let mut context = context(6, 0, true);
    let first = search(&mut context, 11);
    let second = search(&mut context, 11);

    assert_eq!(first, second);
}

#[test]
fn test_stats_are_recorded() {
    let mut context = context(3, 1, true);
    assert_eq!(context.last_score(), None);

    let outcome = search(&mut context, 6);
    assert_eq!(context.last_score(), Some(outcome.score));
    assert!(context.searched_position_count() > 1);
    assert!(context.last_search_duration().is_some());

    context.reset_stats();
    assert_eq!(context.searched_position_count(), 0);
    assert_eq!(context.last_score(), None);
}
