//! HTTP handlers

pub mod root;
pub mod predict;
pub mod health;
pub mod reports;
pub mod openapi;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
