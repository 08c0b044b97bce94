use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchConfig, SearchContext, SearchError};
use crate::board::{Board, BoardError, Coordinate, GameConfig, Winner};
use crate::gobang_search::search_best_move;
use crate::input_handler::MoveInput;

/// Board and search configuration for an engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub game: GameConfig,
    pub search: SearchConfig,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move: {error}")]
    InvalidMove { error: BoardError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// The gomoku engine: owns the board and the search context and exposes
/// the move/undo/evaluate/search contract used by the front ends.
pub struct Engine {
    board: Board,
    search_context: SearchContext,
    last_score: Option<i32>,
}

impl Engine {
    /// An engine with the default 15x15 board and search settings.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let search_context = SearchContext::new(config.search)
            .map_err(|error| EngineError::SearchError { error })?;

        Ok(Self {
            board: Board::new(config.game),
            search_context,
            last_score: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Places a stone for the player to move. Unlike `Board::apply_move`,
    /// an illegal move is reported.
    pub fn make_move(&mut self, coordinate: Coordinate) -> Result<(), EngineError> {
        self.board
            .try_apply_move(coordinate.x, coordinate.y)
            .map_err(|error| EngineError::InvalidMove { error })
    }

    /// Takes back the last stone, returning where it was.
    pub fn undo_move(&mut self) -> Option<Coordinate> {
        match self.board.try_undo_move() {
            Ok(coordinate) => Some(coordinate),
            Err(error) => {
                debug!("nothing undone: {}", error);
                None
            }
        }
    }

    pub fn game_end(&self) -> (bool, Option<Winner>) {
        self.board.game_end()
    }

    /// Static evaluation from the perspective of the player to move.
    pub fn evaluate(&self) -> i32 {
        self.board.evaluate()
    }

    pub fn available_moves(&self) -> Vec<Coordinate> {
        self.board.available_moves()
    }

    pub fn last_move(&self) -> Option<Coordinate> {
        self.board.last_move()
    }

    /// Clears the board, keeping the configuration.
    pub fn reset(&mut self) {
        self.board.reset();
        self.search_context.reset_stats();
        self.last_score = None;
    }

    /// Searches for the best move without playing it. `None` means the game
    /// is over or there is nothing to play; the board must then be left alone.
    pub fn get_best_move(&mut self) -> Result<Option<Coordinate>, EngineError> {
        let outcome = search_best_move(&mut self.search_context, &self.board)
            .map_err(|error| EngineError::SearchError { error })?;
        self.last_score = Some(outcome.score);
        Ok(outcome.best_move)
    }

    /// Searches for the best move and plays it.
    pub fn make_best_move(&mut self) -> Result<Option<Coordinate>, EngineError> {
        let best_move = self.get_best_move()?;
        if let Some(coordinate) = best_move {
            self.make_move(coordinate)?;
        }
        Ok(best_move)
    }

    pub fn make_move_from_input(
        &mut self,
        input: MoveInput,
    ) -> Result<Option<Coordinate>, EngineError> {
        match input {
            MoveInput::Place { coordinate } => {
                self.make_move(coordinate)?;
                Ok(Some(coordinate))
            }
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            depth: self.search_context.search_depth(),
            last_score: self.last_score,
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}
