use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::instrument;

use crate::data::{GameReport, RunRequest, RunSummary, Tally};
use crate::error::AppError;
use crate::game::Roll;
use crate::state::SharedState;

// ==============================================================================
// === REST API Handlers
// =============================================================================

#[instrument(skip(state))]
pub async fn get_game_handler(State(state): State<SharedState>) -> Json<GameReport> {
    let table = state.table.lock().await;
    Json(GameReport::from(&*table))
}

/// Reads the roll history without waiting on the table, so it answers even
/// while a batch run holds the table.
#[instrument(skip(state))]
pub async fn get_rolls_handler(State(state): State<SharedState>) -> Json<Vec<Roll>> {
    Json(state.history.snapshot())
}

#[instrument(skip(state))]
pub async fn play_handler(State(state): State<SharedState>) -> Json<GameReport> {
    let mut table = state.table.lock().await;
    let outcome = table.play();

    tracing::info!(
        outcome = %outcome,
        rolls = state.history.len(),
        wins = table.wins(),
        losses = table.losses(),
        "Game played"
    );
    Json(GameReport::from(&*table))
}

#[instrument(skip(state))]
pub async fn reset_handler(State(state): State<SharedState>) -> Json<GameReport> {
    let mut table = state.table.lock().await;
    table.reset();

    tracing::info!("Table reset");
    Json(GameReport::from(&*table))
}

#[instrument(skip(state))]
pub async fn run_handler(
    State(state): State<SharedState>,
    Json(payload): Json<RunRequest>,
) -> Result<Json<RunSummary>, AppError> {
    let games = payload.games;
    let max = state.config.table.max_batch;
    if games == 0 || games > max {
        return Err(AppError::InvalidBatch { requested: games, max });
    }

    let table = Arc::clone(&state.table);
    let summary = tokio::task::spawn_blocking(move || {
        let mut table = table.blocking_lock();
        let (wins, losses) = (table.wins(), table.losses());
        for _ in 0..games {
            table.play();
        }

        RunSummary {
            games,
            wins: table.wins() - wins,
            losses: table.losses() - losses,
            totals: Tally { wins: table.wins(), losses: table.losses() },
        }
    })
    .await?;

    tracing::info!(games, wins = summary.wins, losses = summary.losses, "Batch run finished");
    Ok(Json(summary))
}
