use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use types::errors::EngineError;

/// Central error type for the gateway
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rejected: {0}")]
    Rejected(String),

    #[error("overloaded: {0}")]
    Overloaded(String),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::BadRequest(reason) => AppError::BadRequest(reason),
            EngineError::NotFound { order_id } => AppError::NotFound(order_id),
            EngineError::Rejected(reason) => AppError::Rejected(reason),
            EngineError::Overloaded { symbol, cap } => {
                AppError::Overloaded(format!("{} at resting-order cap {}", symbol, cap))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::Rejected(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, "REJECTED"),
            AppError::Overloaded(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg, "OVERLOADED"),
        };

        let body = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
