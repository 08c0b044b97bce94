use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*([0-9]{1,3})\s*[, ]\s*([0-9]{1,3})\s*\)?$")
        .expect("COORDINATE_RE regex should be valid")
});

/// A cell on the board. `x` is the column, `y` the row, both zero-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps `distance` cells along `direction`, returning `None` when the
    /// result would leave a board of side `size`.
    pub fn offset(&self, direction: (isize, isize), distance: isize, size: usize) -> Option<Self> {
        let x = self.x as isize + direction.0 * distance;
        let y = self.y as isize + direction.1 * distance;
        if x < 0 || y < 0 || x >= size as isize || y >= size as isize {
            return None;
        }
        Some(Self::new(x as usize, y as usize))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = COORDINATE_RE
            .captures(input.trim())
            .ok_or_else(|| format!("invalid coordinate `{}`; expected `x,y`", input))?;
        let x = caps[1].parse::<usize>().map_err(|e| e.to_string())?;
        let y = caps[2].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(Self::new(x, y))
    }
}
