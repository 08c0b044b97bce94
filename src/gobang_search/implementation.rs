//! Gomoku-specific trait implementations for the alpha-beta search.

use crate::alpha_beta_searcher::{
    alpha_beta_search, Evaluator, GameMove, GameState, MoveGenerator, Outcome, SearchContext,
    SearchError, SearchOutcome,
};
use crate::board::{Board, BoardError, Coordinate, Player, Winner};
use crate::evaluate;

impl GameState for Board {
    type Side = Player;

    #[inline]
    fn side_to_move(&self) -> Player {
        self.current_player()
    }

    #[inline]
    fn outcome(&self) -> Option<Outcome<Player>> {
        self.winner().map(|winner| match winner {
            Winner::Player(player) => Outcome::Win(player),
            Winner::Draw => Outcome::Draw,
        })
    }
}

impl GameMove for Coordinate {
    type State = Board;
    type Error = BoardError;

    #[inline]
    fn apply(&self, state: &mut Board) -> Result<(), BoardError> {
        state.try_apply_move(self.x, self.y)
    }

    fn undo(&self, state: &mut Board) -> Result<(), BoardError> {
        let found = state.last_move().ok_or(BoardError::NothingToUndo)?;
        if found != *self {
            return Err(BoardError::UndoMismatch {
                expected: *self,
                found,
            });
        }
        state.try_undo_move().map(|_| ())
    }
}

/// Candidate moves are the board's available moves, honouring its radius.
#[derive(Clone, Copy, Debug, Default)]
pub struct GobangMoveGenerator;

impl MoveGenerator<Board> for GobangMoveGenerator {
    type Move = Coordinate;

    #[inline]
    fn generate_moves(&self, state: &Board) -> Vec<Coordinate> {
        state.available_moves()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GobangEvaluator;

impl Evaluator<Board> for GobangEvaluator {
    #[inline]
    fn evaluate(&self, state: &Board) -> i32 {
        evaluate::score(state)
    }
}

/// Searches `board` for the best move of the player to move.
pub fn search_best_move(
    context: &mut SearchContext,
    board: &Board,
) -> Result<SearchOutcome<Coordinate>, SearchError> {
    alpha_beta_search(context, board, &GobangMoveGenerator, &GobangEvaluator)
}
