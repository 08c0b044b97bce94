//! Watch command - watch the computer play against itself.

use std::time::Duration;

use gobang::game::input_source::EngineInput;
use gobang::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{run_game_loop, EngineArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            self.engine.engine_config(),
        );
    }
}
