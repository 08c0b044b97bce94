use crate::board::Player;
use crate::input_handler::{parse_menu_input, parse_move_input, InputError, MenuInput, MoveInput};

/// Where moves come from. `Ok(None)` means the input was unusable and the
/// player should be asked again.
pub trait InputSource {
    fn get_move(&self, current_player: Player) -> Result<Option<MoveInput>, InputError>;

    /// Asked once a game has ended. Without a human to ask, the session ends.
    fn get_menu_choice(&self) -> Result<MenuInput, InputError> {
        Ok(MenuInput::Exit)
    }
}

fn human_move() -> Result<Option<MoveInput>, InputError> {
    match parse_move_input() {
        Ok(move_input) => Ok(Some(move_input)),
        Err(InputError::InvalidInput { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}

pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_player: Player) -> Result<Option<MoveInput>, InputError> {
        human_move()
    }

    fn get_menu_choice(&self) -> Result<MenuInput, InputError> {
        parse_menu_input()
    }
}

pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_player: Player) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

/// A human playing `human_player` against the engine.
pub struct ConditionalInput {
    pub human_player: Player,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_player: Player) -> Result<Option<MoveInput>, InputError> {
        if current_player == self.human_player {
            human_move()
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }

    fn get_menu_choice(&self) -> Result<MenuInput, InputError> {
        parse_menu_input()
    }
}
