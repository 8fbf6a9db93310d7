use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::game::{Game, RngRoller, RollHistory};

pub type Table = Game<RngRoller>;

pub struct AppState {
    // The driving side: plays and resets go through this lock.
    pub table: Arc<Mutex<Table>>,
    // Passive readers poll this without waiting on the table.
    pub history: RollHistory,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let roller = match config.table.seed {
            Some(seed) => {
                tracing::info!(seed, "Seeding table dice");
                RngRoller::seeded(seed)
            }
            None => RngRoller::from_entropy(),
        };
        let game = Game::new(roller);

        Self {
            history: game.history(),
            table: Arc::new(Mutex::new(game)),
            config: Arc::new(config),
        }
    }
}

pub type SharedState = Arc<AppState>;
