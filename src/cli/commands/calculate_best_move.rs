//! Calculate best move command - determine the best move from a position.

use gobang::game::engine::Engine;
use structopt::StructOpt;

use super::util::{exit_with_error, EngineArgs, MoveSequence};
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(
        long = "moves",
        default_value = "",
        help = "Moves to replay from an empty board, e.g. \"7,7 7,8 8,8\""
    )]
    pub moves: MoveSequence,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut engine =
            Engine::with_config(self.engine.engine_config()).unwrap_or_else(|e| exit_with_error(e));

        for &coordinate in self.moves.0.iter() {
            if let Err(error) = engine.make_move(coordinate) {
                exit_with_error(format!("cannot replay {}: {}", coordinate, error));
            }
        }

        if let (true, Some(winner)) = engine.game_end() {
            eprintln!("The game is already over: {}.", winner);
            return;
        }

        match engine.get_best_move() {
            Ok(Some(best_move)) => println!("{}", best_move),
            Ok(None) => eprintln!("There are no candidate moves in the given position."),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
