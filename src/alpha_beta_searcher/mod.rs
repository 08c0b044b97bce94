//! Game-agnostic minimax search with alpha-beta pruning.

mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use search::{
    alpha_beta_search, SearchConfig, SearchContext, SearchError, SearchOutcome,
    DEFAULT_MAX_DEPTH, DEFAULT_PARALLELISM, DRAW_SCORE, WIN_SCORE,
};
pub use traits::{Evaluator, GameMove, GameState, MoveGenerator, Outcome};
