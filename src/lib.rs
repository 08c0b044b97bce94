pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod gobang_search;
pub mod input_handler;
pub mod pattern;
pub mod prelude;
