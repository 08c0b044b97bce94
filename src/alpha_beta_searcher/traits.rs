//! Core traits for generic alpha-beta search.

use std::fmt::{Debug, Display};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<S> {
    Win(S),
    Draw,
}

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Identifies one of the two players.
    type Side: Copy + PartialEq + Debug + Send + Sync;

    /// The player whose turn it is.
    fn side_to_move(&self) -> Self::Side;

    /// Returns the result once the game is over, `None` while it is still running.
    fn outcome(&self) -> Option<Outcome<Self::Side>>;
}

/// Represents an action that can be applied to and undone from a game state.
///
/// Applying a move is responsible for passing the turn, so the searcher never
/// toggles turns itself.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug + Display;

    /// Applies this move to the given state.
    fn apply(&self, state: &mut Self::State) -> Result<(), Self::Error>;

    /// Undoes this move on the given state. Must be the most recent move applied.
    fn undo(&self, state: &mut Self::State) -> Result<(), Self::Error>;
}

/// Generates the candidate moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;

    /// Candidate moves for the player to move, in a stable order. The order
    /// decides ties between equally scored moves.
    fn generate_moves(&self, state: &S) -> Vec<Self::Move>;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Evaluates the given state. Higher scores favor the player to move.
    fn evaluate(&self, state: &S) -> i32;
}
