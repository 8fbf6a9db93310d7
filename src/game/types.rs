use serde::Serialize;
use std::fmt;

/// Two die faces, each in `1..=6`.
pub type Dice = [u8; 2];

/// Phase of a single play-through. `Win` and `Loss` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    ComeOut,
    Point,
    Win,
    Loss,
}

impl State {
    /// Applies one roll to the current phase.
    ///
    /// `point` is only consulted while in `Point`. Entering `Point` from
    /// `ComeOut` does not latch anything here; the caller owns the point.
    pub fn next(self, total: u8, point: Option<u8>) -> State {
        match self {
            State::ComeOut => match total {
                7 | 11 => State::Win,
                2 | 3 | 12 => State::Loss,
                _ => State::Point,
            },
            State::Point if Some(total) == point => State::Win,
            State::Point if total == 7 => State::Loss,
            State::Point => State::Point,
            State::Win | State::Loss => self,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, State::Win | State::Loss)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::ComeOut => "COME_OUT",
            State::Point => "POINT",
            State::Win => "WIN",
            State::Loss => "LOSS",
        };
        f.write_str(name)
    }
}

/// One evaluated roll: the dice and the state they produced.
///
/// Only the engine builds these. Accessors hand out copies, so a roll taken
/// from a history snapshot can never alter the history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Roll {
    dice: Dice,
    total: u8,
    state: State,
}

impl Roll {
    pub(crate) fn new(dice: Dice, state: State) -> Self {
        Self {
            dice,
            total: dice[0] + dice[1],
            state,
        }
    }

    pub fn dice(&self) -> Dice {
        self.dice
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn state(&self) -> State {
        self.state
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] {}", self.dice[0], self.dice[1], self.state)
    }
}
