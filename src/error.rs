//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Routing errors
    #[error("{0}")]
    NotFound(String),

    // A generated value failed its response schema
    #[error("response validation failed: {0}")]
    ResponseValidation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::ResponseValidation(msg) => {
                tracing::error!("Response validation error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Generated response failed validation")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ResponseValidation(err.to_string())
    }
}
