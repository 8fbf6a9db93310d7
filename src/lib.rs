pub mod config;
pub mod data;
pub mod error;
pub mod game;
pub mod handlers;
pub mod state;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use config::Config;
use handlers::rest;
use state::AppState;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

pub fn create_app(config: Config) -> Router {
    let state = Arc::new(AppState::new(config));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/game", get(rest::get_game_handler))
        .route("/game/rolls", get(rest::get_rolls_handler))
        .route("/game/play", post(rest::play_handler))
        .route("/game/reset", post(rest::reset_handler))
        .route("/game/run", post(rest::run_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default().include_headers(true)))
        .layer(cors)
}
