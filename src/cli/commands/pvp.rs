//! PvP command - play a game against another human.

use gobang::game::engine::EngineConfig;
use gobang::game::input_source::HumanInput;
use gobang::game::renderer::SimpleRenderer;
use structopt::StructOpt;

use super::util::{run_game_loop, BoardArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(flatten)]
    pub board: BoardArgs,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = EngineConfig {
            game: self.board.game_config(),
            ..EngineConfig::default()
        };
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}
