//! Play command - play a game against the computer.

use gobang::board::Player;
use gobang::game::input_source::ConditionalInput;
use gobang::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{run_game_loop, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(short = "p", long = "player", default_value = "random")]
    pub player: Player,
}

impl Command for PlayArgs {
    fn execute(self) {
        run_game_loop(
            ConditionalInput {
                human_player: self.player,
            },
            ConditionalStatsRenderer {
                human_player: self.player,
            },
            self.engine.engine_config(),
        );
    }
}
