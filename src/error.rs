use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Batch of {requested} games is outside 1..={max}")]
    InvalidBatch { requested: u32, max: u32 },

    #[error("Table worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidBatch { .. } => {
                tracing::warn!("Rejected run request: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Worker(e) => {
                tracing::error!("Table worker error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "The table worker failed".to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
