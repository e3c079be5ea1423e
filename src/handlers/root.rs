//! Root liveness handler

use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = "Anomaly Detection API";

#[derive(Serialize)]
pub struct ServiceStatus {
    status: &'static str,
    service: &'static str,
}

pub async fn status() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok",
        service: SERVICE_NAME,
    })
}
