use thiserror::Error;

use super::coordinate::Coordinate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board size must be at least 1, got {size}")]
    InvalidSize { size: usize },
    #[error("Cannot place a stone at ({x}, {y}), it is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("Cannot place a stone at ({x}, {y}), the cell is already occupied")]
    CellOccupied { x: usize, y: usize },
    #[error("Cannot place a stone, the game is already over")]
    GameOver,
    #[error("Cannot undo, no stones have been placed")]
    NothingToUndo,
    #[error("Cannot undo {expected}, the last stone placed was {found}")]
    UndoMismatch {
        expected: Coordinate,
        found: Coordinate,
    },
}
