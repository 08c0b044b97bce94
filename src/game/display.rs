use termion::{clear, cursor};

use crate::board::{Board, Player};

/// Draws one full frame of the game to the terminal.
pub struct GameDisplay {
    buffer: String,
    status: Option<String>,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
            status: None,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Shows `message` under the board on the next frame only.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn render_game_state(&mut self, board: &Board, current_player: Player, stats: Option<&str>) {
        self.clear();

        self.buffer.push_str(&board.to_ascii());
        self.buffer.push('\n');

        self.buffer
            .push_str(&format!("Turn: {}\n", current_player));
        if let Some(last_move) = board.last_move() {
            self.buffer.push_str(&format!("Last move: {}\n", last_move));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        if let Some(status) = self.status.take() {
            self.buffer.push_str(&format!("\n{}\n", status));
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
