//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::str::FromStr;

use gobang::alpha_beta_searcher::SearchConfig;
use gobang::board::{Board, Coordinate, GameConfig, Radius};
use gobang::game::engine::EngineConfig;
use gobang::game::input_source::InputSource;
use gobang::game::r#loop::GameLoop;
use gobang::game::renderer::GameRenderer;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct BoardArgs {
    #[structopt(long, default_value = "15", help = "Side length of the board")]
    pub size: usize,
    #[structopt(
        long,
        default_value = "unlimited",
        help = "Only consider moves within this distance of the last move"
    )]
    pub radius: Radius,
}

impl BoardArgs {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.size, self.radius).unwrap_or_else(|error| exit_with_error(error))
    }
}

#[derive(StructOpt)]
pub struct EngineArgs {
    #[structopt(flatten)]
    pub board: BoardArgs,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(
        short = "j",
        long,
        default_value = "1",
        help = "Search threads; 0 uses every available core"
    )]
    pub parallelism: usize,
}

impl EngineArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            parallelism: self.parallelism,
            ..SearchConfig::default()
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            game: self.board.game_config(),
            search: self.search_config(),
        }
    }
}

/// Whitespace-separated moves such as `"7,7 7,8 8,8"`.
#[derive(Debug, Default)]
pub struct MoveSequence(pub Vec<Coordinate>);

impl FromStr for MoveSequence {
    type Err = String;

    fn from_str(moves: &str) -> Result<Self, Self::Err> {
        moves
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Coordinate>, String>>()
            .map(MoveSequence)
    }
}

/// Replays `moves` in order from an empty board, failing on the first illegal one.
pub(crate) fn replay(config: GameConfig, moves: &MoveSequence) -> Board {
    let mut board = Board::new(config);
    for coordinate in moves.0.iter() {
        if let Err(error) = board.try_apply_move(coordinate.x, coordinate.y) {
            exit_with_error(format!("cannot replay {}: {}", coordinate, error));
        }
    }
    board
}

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let result = GameLoop::new(input_source, renderer, config).and_then(|mut game| game.run());
    if let Err(error) = result {
        exit_with_error(error);
    }
}

pub(crate) fn exit_with_error<E: Display>(error: E) -> ! {
    eprintln!("error: {}", error);
    std::process::exit(1);
}
