use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recommendation artifact is not loaded")]
    ModelUnavailable,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ModelUnavailable => {
                tracing::error!("Prediction requested while the artifact is unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Recommendation service is unavailable".to_string(),
                )
            }
            // Detail stays in the logs, the client gets a generic message
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Converts a caught handler panic into the standard error response shape
pub fn handle_panic(panic: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(detail = %detail, "Request handler panicked");

    let body = Json(json!({
        "error": "Internal server error"
    }));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
