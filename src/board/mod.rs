pub mod config;
pub mod coordinate;
pub mod error;
pub mod player;

mod display;


use log::debug;

pub use config::{GameConfig, Radius};
pub use coordinate::Coordinate;
pub use error::BoardError;
pub use player::{Player, Winner};

use crate::evaluate;

/// The four undirected line directions: horizontal, vertical and both diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Stones in a row needed to win. Longer lines also win.
pub const WIN_LENGTH: usize = 5;

/// Represents the state of a gomoku board: the grid, whose turn it is, the
/// ordered history of placed stones and the result once the game has ended.
///
/// The board only ever changes through `apply_move`/`undo_move` (or their
/// strict `try_` counterparts), so the number of stones on the grid always
/// equals the length of the history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    config: GameConfig,
    grid: Vec<Option<Player>>,
    current_player: Player,
    history: Vec<Coordinate>,
    winner: Option<Winner>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        let cells = config.size() * config.size();
        Self {
            config,
            grid: vec![None; cells],
            current_player: Player::One,
            history: Vec::with_capacity(cells),
            winner: None,
        }
    }

    /// Clears the board back to the empty starting position, keeping the config.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> usize {
        self.config.size()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Coordinate> {
        self.history.last().copied()
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns `(is_over, winner)`.
    pub fn game_end(&self) -> (bool, Option<Winner>) {
        (self.is_over(), self.winner)
    }

    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    pub fn empty_cell_count(&self) -> usize {
        self.grid.len() - self.history.len()
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size()
    }

    /// The stone at `coordinate`, or `None` for an empty or off-board cell.
    pub fn get(&self, coordinate: Coordinate) -> Option<Player> {
        if !self.in_bounds(coordinate.x, coordinate.y) {
            return None;
        }
        self.grid[self.index(coordinate)]
    }

    /// Places a stone for the current player. Illegal moves (off the board,
    /// on an occupied cell, or after the game ended) are ignored.
    pub fn apply_move(&mut self, x: usize, y: usize) {
        if let Err(error) = self.try_apply_move(x, y) {
            debug!("ignoring move ({}, {}): {}", x, y, error);
        }
    }

    /// Places a stone for the current player, reporting why an illegal move
    /// was refused. The board is untouched on error.
    pub fn try_apply_move(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size(),
            });
        }
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        let coordinate = Coordinate::new(x, y);
        let index = self.index(coordinate);
        if self.grid[index].is_some() {
            return Err(BoardError::CellOccupied { x, y });
        }

        self.grid[index] = Some(self.current_player);
        self.history.push(coordinate);

        if self.check_win() {
            self.winner = Some(Winner::Player(self.current_player));
            return Ok(());
        }

        if self.empty_cell_count() == 0 {
            self.winner = Some(Winner::Draw);
            return Ok(());
        }

        self.current_player = self.current_player.opposite();
        Ok(())
    }

    /// Takes back the last stone. Does nothing on an empty board.
    pub fn undo_move(&mut self) {
        if let Err(error) = self.try_undo_move() {
            debug!("ignoring undo: {}", error);
        }
    }

    /// Takes back the last stone and returns where it was.
    ///
    /// The turn passes back to the player who placed it and any result is
    /// cleared, so undoing a winning or drawing move reopens the game.
    pub fn try_undo_move(&mut self) -> Result<Coordinate, BoardError> {
        let coordinate = self.history.pop().ok_or(BoardError::NothingToUndo)?;
        let index = self.index(coordinate);
        // a winning or drawing move keeps the turn, so restore the placer
        // rather than flipping
        if let Some(placed_by) = self.grid[index].take() {
            self.current_player = placed_by;
        }
        self.winner = None;
        Ok(coordinate)
    }

    /// Returns true if the most recently placed stone completes five or more
    /// in a row for the player who placed it.
    pub fn check_win(&self) -> bool {
        let last = match self.last_move() {
            Some(coordinate) => coordinate,
            None => return false,
        };
        let player = match self.get(last) {
            Some(player) => player,
            None => return false,
        };

        DIRECTIONS.iter().any(|&direction| {
            let mut count = 1;
            for &sign in &[1isize, -1] {
                for distance in 1..WIN_LENGTH as isize {
                    match last.offset(direction, sign * distance, self.size()) {
                        Some(next) if self.get(next) == Some(player) => count += 1,
                        _ => break,
                    }
                    if count >= WIN_LENGTH {
                        return true;
                    }
                }
            }
            false
        })
    }

    /// Candidate moves for the player to move, ordered by `x` then `y`.
    ///
    /// With a limited radius and at least one stone placed, only empty cells
    /// inside the square window around the last move are returned.
    pub fn available_moves(&self) -> Vec<Coordinate> {
        let max_index = self.size() - 1;
        let (x_range, y_range) = match (self.config.radius(), self.last_move()) {
            (Radius::Limited(radius), Some(last)) => (
                last.x.saturating_sub(radius)..=max_index.min(last.x.saturating_add(radius)),
                last.y.saturating_sub(radius)..=max_index.min(last.y.saturating_add(radius)),
            ),
            _ => (0..=max_index, 0..=max_index),
        };

        let mut moves = Vec::with_capacity(self.empty_cell_count());
        for x in x_range {
            for y in y_range.clone() {
                let coordinate = Coordinate::new(x, y);
                if self.grid[self.index(coordinate)].is_none() {
                    moves.push(coordinate);
                }
            }
        }
        moves
    }

    /// Static evaluation from the perspective of the player to move.
    pub fn evaluate(&self) -> i32 {
        evaluate::score(self)
    }

    fn index(&self, coordinate: Coordinate) -> usize {
        coordinate.x * self.size() + coordinate.y
    }
}
