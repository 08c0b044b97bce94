use log::debug;

use crate::board::Winner;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::{InputError, MenuInput, MoveInput};

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input: I, renderer: R, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            ui: GameDisplay::new(),
            input,
            renderer,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Plays until the user quits, or until a game ends and no one asks for
    /// another. Search failures end the session.
    pub fn run(&mut self) -> Result<(), EngineError> {
        loop {
            let current_player = self.engine.board().current_player();
            self.renderer
                .render(&mut self.ui, &self.engine, current_player);

            if let (true, Some(winner)) = self.engine.game_end() {
                match winner {
                    Winner::Player(player) => println!("{} wins!", player),
                    Winner::Draw => println!("Draw!"),
                }
                println!("Enter `1` to start over or `q` to quit:");

                match self.input.get_menu_choice() {
                    Ok(MenuInput::StartOver) => self.engine.reset(),
                    Ok(MenuInput::Exit) | Err(InputError::UserExit) => return Ok(()),
                    Err(error) => self.ui.set_status(format!("error: {}", error)),
                }
                continue;
            }

            let input = match self.input.get_move(current_player) {
                Ok(Some(input)) => input,
                Ok(None) => {
                    self.ui.set_status("Invalid input, expected x,y");
                    continue;
                }
                Err(InputError::UserExit) => return Ok(()),
                Err(error) => {
                    self.ui.set_status(format!("error: {}", error));
                    continue;
                }
            };
            let uses_engine = input == MoveInput::UseEngine;

            match self.engine.make_move_from_input(input) {
                Ok(Some(coordinate)) => {
                    debug!("{} played {}", current_player, coordinate);
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Ok(None) => {
                    // no candidates left within the configured radius
                    println!("{} has no move to play", current_player);
                    return Ok(());
                }
                Err(error @ EngineError::InvalidMove { .. }) if !uses_engine => {
                    self.ui.set_status(format!("error: {}", error));
                }
                Err(error) => return Err(error),
            }
        }
    }
}
