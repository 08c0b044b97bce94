//! Count positions command - count the positions searched at each depth.

use gobang::game::position_counter::{run_count_positions, CountPositionsStrategy};
use structopt::StructOpt;

use super::util::{exit_with_error, replay, EngineArgs, MoveSequence};
use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(short, long, default_value = "all")]
    pub strategy: CountPositionsStrategy,
    #[structopt(
        long = "moves",
        default_value = "",
        help = "Moves to replay from an empty board before counting"
    )]
    pub moves: MoveSequence,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let board = replay(self.engine.board.game_config(), &self.moves);
        if let Err(error) = run_count_positions(&board, self.engine.search_config(), self.strategy)
        {
            exit_with_error(error);
        }
    }
}
