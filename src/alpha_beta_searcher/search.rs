//! Depth-limited minimax search with alpha-beta pruning.
//!
//! # Core Algorithm
//!
//! Minimax alternates maximizing and minimizing nodes with depth parity, the
//! root being a maximizing node for the player to move. Alpha-beta keeps a
//! window `[alpha, beta]` of scores that can still influence the root and
//! stops exploring a node's moves as soon as its running best falls outside
//! that window. The move and score found are the same as plain minimax.
//!
//! Scores are always reported from the perspective of the player to move at
//! the root:
//! - a finished game scores [`WIN_SCORE`] when the root player won,
//!   `-WIN_SCORE` when the opponent won and [`DRAW_SCORE`] for a draw;
//! - a horizon node returns the evaluator's score, negated when the opponent
//!   is to move there.
//!
//! Ties between equally scored moves keep the earliest candidate.
//!
//! # Parallel Search
//!
//! With a parallelism other than 1 the root candidates are fanned out across a
//! dedicated rayon thread pool. Each task searches its subtree on its own copy
//! of the state with a fresh window, so nothing mutable is shared between
//! workers. Results are merged in candidate order, which keeps the chosen move
//! independent of task completion order.

use std::cmp::{max, min};
use std::num::NonZeroUsize;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;

use super::{Evaluator, GameMove, GameState, MoveGenerator, Outcome};

/// Score of a won game, from the winner's side.
pub const WIN_SCORE: i32 = 100_000;
/// Score of a drawn game and of a node without candidate moves.
pub const DRAW_SCORE: i32 = 0;

pub const DEFAULT_MAX_DEPTH: u8 = 3;
pub const DEFAULT_PARALLELISM: usize = 1;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search depth must be at least 1")]
    DepthTooLow,
    #[error("requested {requested} search threads but only {available} are available")]
    ParallelismUnavailable { requested: usize, available: usize },
    #[error("failed to start search threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("move failed during search: {message}")]
    MoveApplication { message: String },
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root. Must be at least 1.
    pub max_depth: u8,
    /// Worker threads for root fan-out. `1` searches on the calling thread,
    /// `0` uses every available execution unit.
    pub parallelism: usize,
    /// Alpha-beta cutoffs. Disabling them runs plain minimax.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallelism: DEFAULT_PARALLELISM,
            pruning: true,
        }
    }
}

/// Best move and its score, from the perspective of the player to move.
///
/// `best_move` is `None` when the position is already decided or there is
/// nothing to play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<M> {
    pub best_move: Option<M>,
    pub score: i32,
}

/// Statistics collected during the last search.
#[derive(Clone, Copy, Debug, Default)]
struct SearchStats {
    position_count: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, position_count: usize, score: i32, duration: Duration) {
        self.position_count = position_count;
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }
}

/// Validated search configuration, the worker pool and the last search's statistics.
pub struct SearchContext {
    config: SearchConfig,
    worker_count: usize,
    pool: Option<ThreadPool>,
    stats: SearchStats,
}

impl SearchContext {
    /// Validates `config` and starts the worker pool when root fan-out is requested.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        if config.max_depth < 1 {
            return Err(SearchError::DepthTooLow);
        }

        let available = available_parallelism();
        let worker_count = match config.parallelism {
            0 => available,
            requested if requested > available => {
                return Err(SearchError::ParallelismUnavailable {
                    requested,
                    available,
                })
            }
            requested => requested,
        };

        let pool = if config.parallelism == 1 {
            None
        } else {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(worker_count)
                    .thread_name(|index| format!("search-worker-{}", index))
                    .build()?,
            )
        };

        debug!(
            "search context: depth {}, {} worker(s), pruning {}",
            config.max_depth,
            worker_count,
            if config.pruning { "on" } else { "off" }
        );

        Ok(Self {
            config,
            worker_count,
            pool,
            stats: SearchStats::default(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search_depth(&self) -> u8 {
        self.config.max_depth
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}

fn available_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Applies a move, executes a closure with the new state, then undoes the move.
fn with_move_applied<S, M, F, R>(game_move: &M, state: &mut S, f: F) -> Result<R, SearchError>
where
    S: GameState,
    M: GameMove<State = S>,
    F: FnOnce(&mut S) -> Result<R, SearchError>,
{
    game_move
        .apply(state)
        .map_err(|error| SearchError::MoveApplication {
            message: format!("applying {:?}: {}", game_move, error),
        })?;

    let result = f(state);

    game_move
        .undo(state)
        .map_err(|error| SearchError::MoveApplication {
            message: format!("undoing {:?}: {}", game_move, error),
        })?;

    result
}

/// Updates best score and move if new score is strictly better.
/// Returns true if best_score was updated.
fn update_best<M: Clone>(
    score: i32,
    candidate_move: &M,
    maximizing_player: bool,
    best_score: &mut i32,
    best_move: &mut Option<M>,
) -> bool {
    let is_better = if maximizing_player {
        score > *best_score
    } else {
        score < *best_score
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move.clone());
    }
    is_better
}

// A winning move keeps the turn with the winner, so outcomes are scored
// against the root side rather than the side to move.
fn terminal_score<T: PartialEq>(outcome: Outcome<T>, root_side: T) -> i32 {
    match outcome {
        Outcome::Draw => DRAW_SCORE,
        Outcome::Win(winner) if winner == root_side => WIN_SCORE,
        Outcome::Win(_) => -WIN_SCORE,
    }
}

fn initial_best(maximizing_player: bool) -> i32 {
    if maximizing_player {
        i32::MIN
    } else {
        i32::MAX
    }
}

/// Searches `state` to the configured depth and returns the best move for the
/// player to move.
///
/// The caller's state is never modified: the search runs on copies.
///
/// # Returns
///
/// - `Ok(outcome)` with `best_move: None` when the game is already over (the
///   score is then the terminal score) or when there are no candidate moves
///   (the score is then [`DRAW_SCORE`])
/// - `Err(SearchError::MoveApplication)` if a generated move cannot be applied
///   or undone
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new(SearchConfig::default())?;
/// let outcome = alpha_beta_search(&mut context, &board, &move_gen, &evaluator)?;
/// ```
#[must_use = "search returns the best move found"]
pub fn alpha_beta_search<S, G, E>(
    context: &mut SearchContext,
    state: &S,
    move_generator: &G,
    evaluator: &E,
) -> Result<SearchOutcome<G::Move>, SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let depth = context.config.max_depth;
    let pruning = context.config.pruning;
    let root_side = state.side_to_move();
    let start = Instant::now();
    context.reset_stats();

    if let Some(outcome) = state.outcome() {
        let score = terminal_score(outcome, root_side);
        debug!("search called on a finished game, score {}", score);
        context.stats.record_result(1, score, start.elapsed());
        return Ok(SearchOutcome {
            best_move: None,
            score,
        });
    }

    let candidates = move_generator.generate_moves(state);
    debug!(
        "alpha-beta search depth: {}, {} candidate(s), {} worker(s)",
        depth,
        candidates.len(),
        context.worker_count
    );

    if candidates.is_empty() {
        context.stats.record_result(1, DRAW_SCORE, start.elapsed());
        return Ok(SearchOutcome {
            best_move: None,
            score: DRAW_SCORE,
        });
    }

    let (score, best_move, position_count) = match context.pool.as_ref() {
        Some(pool) => search_root_parallel(
            pool,
            state,
            move_generator,
            evaluator,
            &candidates,
            depth,
            root_side,
            pruning,
        )?,
        None => search_root_sequential(
            state,
            move_generator,
            evaluator,
            &candidates,
            depth,
            root_side,
            pruning,
        )?,
    };

    let duration = start.elapsed();
    context.stats.record_result(position_count, score, duration);
    debug!(
        "best move {:?} scores {} after {} positions in {:?}",
        best_move, score, position_count, duration
    );

    Ok(SearchOutcome { best_move, score })
}

#[allow(clippy::too_many_arguments)]
fn search_root_sequential<S, G, E>(
    state: &S,
    move_generator: &G,
    evaluator: &E,
    candidates: &[G::Move],
    depth: u8,
    root_side: S::Side,
    pruning: bool,
) -> Result<(i32, Option<G::Move>, usize), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let mut state = state.clone();
    let mut searcher = Searcher::new(move_generator, evaluator, root_side, pruning);
    searcher.position_count += 1;

    let mut best_score = i32::MIN;
    let mut best_move = None;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;

    for game_move in candidates {
        let score = with_move_applied(game_move, &mut state, |state| {
            searcher.minimax(state, depth - 1, alpha, beta, false)
        })?;
        trace!("root candidate {:?} scores {}", game_move, score);

        update_best(score, game_move, true, &mut best_score, &mut best_move);
        if pruning {
            if best_score >= beta {
                break;
            }
            alpha = max(alpha, best_score);
        }
    }

    Ok((best_score, best_move, searcher.position_count))
}

#[allow(clippy::too_many_arguments)]
fn search_root_parallel<S, G, E>(
    pool: &ThreadPool,
    state: &S,
    move_generator: &G,
    evaluator: &E,
    candidates: &[G::Move],
    depth: u8,
    root_side: S::Side,
    pruning: bool,
) -> Result<(i32, Option<G::Move>, usize), SearchError>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    let results = pool.install(|| {
        candidates
            .par_iter()
            .map(|game_move| -> Result<(i32, usize), SearchError> {
                let mut cloned_state = state.clone();
                let mut searcher = Searcher::new(move_generator, evaluator, root_side, pruning);

                let score = with_move_applied(game_move, &mut cloned_state, |state| {
                    searcher.minimax(state, depth - 1, i32::MIN, i32::MAX, false)
                })?;
                trace!("root candidate {:?} scores {}", game_move, score);

                Ok((score, searcher.position_count))
            })
            .collect::<Result<Vec<_>, SearchError>>()
    })?;

    let mut best_score = i32::MIN;
    let mut best_move = None;
    let mut position_count = 1;

    // `results` is in candidate order, so strict comparison keeps the earliest move
    for (game_move, (score, positions)) in candidates.iter().zip(results) {
        position_count += positions;
        update_best(score, game_move, true, &mut best_score, &mut best_move);
    }

    Ok((best_score, best_move, position_count))
}

/// Recursive search below the root. Owns nothing but its node counter, so each
/// root subtree can run on its own thread.
struct Searcher<'a, S: GameState, G, E> {
    move_generator: &'a G,
    evaluator: &'a E,
    root_side: S::Side,
    pruning: bool,
    position_count: usize,
}

impl<'a, S, G, E> Searcher<'a, S, G, E>
where
    S: GameState,
    G: MoveGenerator<S>,
    E: Evaluator<S>,
{
    fn new(move_generator: &'a G, evaluator: &'a E, root_side: S::Side, pruning: bool) -> Self {
        Self {
            move_generator,
            evaluator,
            root_side,
            pruning,
            position_count: 0,
        }
    }

    fn minimax(
        &mut self,
        state: &mut S,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing_player: bool,
    ) -> Result<i32, SearchError> {
        self.position_count += 1;

        if let Some(outcome) = state.outcome() {
            return Ok(terminal_score(outcome, self.root_side));
        }

        if depth == 0 {
            let score = self.evaluator.evaluate(state);
            return Ok(if state.side_to_move() == self.root_side {
                score
            } else {
                -score
            });
        }

        let candidates = self.move_generator.generate_moves(state);
        if candidates.is_empty() {
            return Ok(DRAW_SCORE);
        }

        let mut best_score = initial_best(maximizing_player);
        for game_move in candidates.iter() {
            let score = with_move_applied(game_move, state, |state| {
                self.minimax(state, depth - 1, alpha, beta, !maximizing_player)
            })?;

            if maximizing_player {
                best_score = max(best_score, score);
            } else {
                best_score = min(best_score, score);
            }

            if !self.pruning {
                continue;
            }
            if maximizing_player {
                if best_score >= beta {
                    break;
                }
                alpha = max(alpha, best_score);
            } else {
                if best_score <= alpha {
                    break;
                }
                beta = min(beta, best_score);
            }
        }

        Ok(best_score)
    }
}
