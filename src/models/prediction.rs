//! Prediction model

use std::ops::RangeInclusive;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Sensor reading band for anomalous points
pub const ANOMALY_FEATURE_RANGE: RangeInclusive<f64> = 90.0..=110.0;
/// Score band for anomalous points
pub const ANOMALY_SCORE_RANGE: RangeInclusive<f64> = 0.7..=0.99;
/// Sensor reading band for normal points
pub const NORMAL_FEATURE_RANGE: RangeInclusive<f64> = 40.0..=60.0;
/// Score band for normal points
pub const NORMAL_SCORE_RANGE: RangeInclusive<f64> = 0.1..=0.4;

/// A single mock real-time prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_bands"))]
pub struct PredictionPoint {
    pub timestamp: DateTime<FixedOffset>,
    pub feature_value: f64,
    pub prediction_score: f64,
    pub is_anomaly: bool,
}

impl PredictionPoint {
    /// Bands the point must fall into for its classification
    pub fn bands(is_anomaly: bool) -> (RangeInclusive<f64>, RangeInclusive<f64>) {
        if is_anomaly {
            (ANOMALY_FEATURE_RANGE, ANOMALY_SCORE_RANGE)
        } else {
            (NORMAL_FEATURE_RANGE, NORMAL_SCORE_RANGE)
        }
    }
}

fn validate_bands(point: &PredictionPoint) -> Result<(), ValidationError> {
    let (feature_range, score_range) = PredictionPoint::bands(point.is_anomaly);

    if !feature_range.contains(&point.feature_value) {
        return Err(ValidationError::new("feature_value_out_of_band"));
    }
    if !score_range.contains(&point.prediction_score) {
        return Err(ValidationError::new("prediction_score_out_of_band"));
    }
    Ok(())
}
