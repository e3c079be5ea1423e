//! Real-time prediction handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppResult, AppState};
use crate::mock::generate_prediction;
use crate::models::PredictionPoint;

/// Return one prediction from the mocked model
pub async fn predict(State(state): State<AppState>) -> AppResult<Json<PredictionPoint>> {
    let point = generate_prediction(state.rng.as_ref(), state.clock.as_ref());
    point.validate()?;

    tracing::debug!(
        feature_value = point.feature_value,
        prediction_score = point.prediction_score,
        is_anomaly = point.is_anomaly,
        "prediction generated"
    );

    Ok(Json(point))
}
