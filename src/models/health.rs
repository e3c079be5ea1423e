//! Model health model

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Monitoring metrics for the mock model
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ModelHealthRecord {
    #[validate(length(min = 1))]
    pub model_version: String,
    #[validate(custom(function = "validate_iso8601"))]
    pub last_trained: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub accuracy: f64,
    /// Values above 0.2 would usually be flagged
    #[validate(range(min = 0.0))]
    pub data_drift_metric: f64,
    #[validate(length(min = 1))]
    pub serving_status: String,
}

impl ModelHealthRecord {
    /// Static health record served by `/health`
    pub fn mock() -> Self {
        Self {
            model_version: "v2.1.3".to_string(),
            last_trained: "2025-11-10T14:30:00Z".to_string(),
            accuracy: 0.975,
            data_drift_metric: 0.15,
            serving_status: "Healthy".to_string(),
        }
    }
}

fn validate_iso8601(value: &str) -> Result<(), ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("not_iso8601"))
}
