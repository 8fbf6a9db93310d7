use serde::{Deserialize, Serialize};

use crate::game::{Game, Roll, Roller, State};

// --- DTOs (Data Transfer Objects) ---
#[derive(Debug, Serialize)]
pub struct GameReport {
    pub state: State,
    pub point: Option<u8>,
    pub wins: u32,
    pub losses: u32,
    pub rolls: Vec<Roll>,
}

impl<R: Roller> From<&Game<R>> for GameReport {
    fn from(game: &Game<R>) -> Self {
        Self {
            state: game.state(),
            point: game.point(),
            wins: game.wins(),
            losses: game.losses(),
            rolls: game.rolls(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub games: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    /// Lifetime tallies after the batch.
    pub totals: Tally,
}
