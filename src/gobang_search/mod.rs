//! Gomoku-specific implementation of the alpha-beta search traits.

pub mod implementation;

#[cfg(test)]
mod tests;

pub use implementation::{search_best_move, GobangEvaluator, GobangMoveGenerator};
