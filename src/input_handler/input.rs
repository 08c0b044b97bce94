//! Move and menu input parsing.

use std::io::{self, BufRead};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coordinate;

static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(q|quit|exit)$").expect("QUIT_RE regex should be valid"));
static RESTART_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(1|r|restart)$").expect("RESTART_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Place { coordinate: Coordinate },
    UseEngine,
}

/// Choices offered once a game has ended.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuInput {
    StartOver,
    Exit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if QUIT_RE.is_match(&trimmed) {
            return Err(InputError::UserExit);
        }

        trimmed
            .parse::<Coordinate>()
            .map(|coordinate| MoveInput::Place { coordinate })
            .map_err(|_| InputError::InvalidInput {
                input: input.to_string(),
            })
    }
}

impl FromStr for MenuInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if RESTART_RE.is_match(&trimmed) {
            Ok(MenuInput::StartOver)
        } else if QUIT_RE.is_match(&trimmed) {
            Ok(MenuInput::Exit)
        } else {
            Err(InputError::InvalidInput {
                input: input.to_string(),
            })
        }
    }
}

/// Reads one line from stdin. End of input counts as a request to exit.
fn read_line() -> Result<String, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if read == 0 {
        return Err(InputError::UserExit);
    }
    Ok(input)
}

/// Reads a move typed as `x,y` or `x y`. `quit` exits.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    read_line()?.parse()
}

/// Reads the post-game choice: `1`/`restart` or `q`/`quit`.
pub fn parse_menu_input() -> Result<MenuInput, InputError> {
    read_line()?.parse()
}
