//! Model health handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppResult, AppState};
use crate::models::ModelHealthRecord;

/// Return the static model monitoring metrics
pub async fn check(State(state): State<AppState>) -> AppResult<Json<ModelHealthRecord>> {
    state.health.validate()?;
    Ok(Json(state.health.as_ref().clone()))
}
