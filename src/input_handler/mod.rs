//! Parsing of typed player input.

mod input;

pub use input::{parse_menu_input, parse_move_input, InputError, MenuInput, MoveInput};
