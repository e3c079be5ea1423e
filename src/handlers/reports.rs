//! Historical reports handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::{AppResult, AppState};
use crate::mock::generate_reports;
use crate::models::ReportRecord;

/// Return a fresh batch of synthetic incident reports
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ReportRecord>>> {
    let reports = generate_reports(state.rng.as_ref(), state.clock.as_ref());

    for report in &reports {
        report.validate()?;
    }

    tracing::debug!("Generated {} reports", reports.len());
    Ok(Json(reports))
}
