pub mod rest;

pub use rest::{get_game_handler, get_rolls_handler, play_handler, reset_handler, run_handler};
