use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// One of the two sides. `One` always places the first stone.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn stone_char(&self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Player::One)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player one",
            Player::Two => "player two",
        };
        write!(f, "{} ({})", player_str, self.stone_char())
    }
}

/// Final result of a finished game.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Winner {
    Draw,
    Player(Player),
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Draw => write!(f, "draw"),
            Winner::Player(player) => write!(f, "{} wins", player),
        }
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "one" | "1" => Ok(Player::One),
            "two" | "2" => Ok(Player::Two),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: one, two, random"),
        }
    }
}
