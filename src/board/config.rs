use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

pub const DEFAULT_BOARD_SIZE: usize = 15;

/// How far from the last stone candidate moves are generated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Radius {
    Unlimited,
    /// Half-width of the square window centred on the last move.
    Limited(usize),
}

impl Default for Radius {
    fn default() -> Self {
        Radius::Unlimited
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radius::Unlimited => write!(f, "unlimited"),
            Radius::Limited(radius) => write!(f, "{}", radius),
        }
    }
}

// used for parsing cli args
impl FromStr for Radius {
    type Err = &'static str;
    fn from_str(radius: &str) -> Result<Self, Self::Err> {
        match radius {
            "unlimited" | "-1" => Ok(Radius::Unlimited),
            other => other
                .parse::<usize>()
                .map(Radius::Limited)
                .map_err(|_| "invalid radius; expected `unlimited` or a non-negative integer"),
        }
    }
}

/// Board geometry and move-generation settings. Fixed once the board is built.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameConfig {
    size: usize,
    radius: Radius,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            radius: Radius::Unlimited,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize, radius: Radius) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self { size, radius })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn radius(&self) -> Radius {
        self.radius
    }
}
