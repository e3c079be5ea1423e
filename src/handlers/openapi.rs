//! API description handler

use axum::{extract::State, Json};
use serde_json::{json, Map, Value};

use crate::AppState;

pub const API_TITLE: &str = "Real-Time Anomaly Prediction API";
pub const API_DESCRIPTION: &str =
    "Mock API for a predictive anomaly detection model, designed for a full-stack MLOps project.";

struct RouteDoc {
    path: &'static str,
    summary: &'static str,
    description: &'static str,
}

const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        path: "/",
        summary: "Root Health Check",
        description: "Simple liveness check.",
    },
    RouteDoc {
        path: "/predict",
        summary: "Get Real-Time Prediction",
        description: "A single prediction from the mocked model: a simulated sensor reading and its anomaly score.",
    },
    RouteDoc {
        path: "/health",
        summary: "Get MLOps Model Health Metrics",
        description: "Static monitoring metrics for the mocked model.",
    },
    RouteDoc {
        path: "/reports",
        summary: "Get Historical Anomaly Reports",
        description: "A batch of five synthetic past incidents.",
    },
];

/// Build the OpenAPI document for the mounted routes
pub fn document(enable_reports: bool) -> Value {
    let mut paths = Map::new();

    for route in ROUTES {
        if route.path == "/reports" && !enable_reports {
            continue;
        }
        paths.insert(
            route.path.to_string(),
            json!({
                "get": {
                    "summary": route.summary,
                    "description": route.description,
                    "responses": {
                        "200": { "description": "Successful Response" }
                    }
                }
            }),
        );
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "description": API_DESCRIPTION,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": paths,
    })
}

pub async fn spec(State(state): State<AppState>) -> Json<Value> {
    Json(document(state.config.enable_reports))
}
