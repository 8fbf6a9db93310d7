pub mod domain;
pub mod history;
pub mod roller;
pub mod types;

#[cfg(test)]
mod tests;

pub use domain::Game;
pub use history::RollHistory;
pub use roller::{RngRoller, Roller};
pub use types::{Dice, Roll, State};
