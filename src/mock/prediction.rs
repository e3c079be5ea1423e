//! Real-time prediction generator

use super::{round_to, Clock, RandomSource};
use crate::models::PredictionPoint;

/// Share of points flagged as anomalies
pub const ANOMALY_RATE: f64 = 0.1;

/// Generate one mock sensor reading and its anomaly score
pub fn generate_prediction(rng: &dyn RandomSource, clock: &dyn Clock) -> PredictionPoint {
    let timestamp = clock.now();
    let is_anomaly = rng.uniform(0.0, 1.0) < ANOMALY_RATE;

    let (feature_range, score_range) = PredictionPoint::bands(is_anomaly);
    let feature_value = round_to(rng.uniform(*feature_range.start(), *feature_range.end()), 2);
    let prediction_score = round_to(rng.uniform(*score_range.start(), *score_range.end()), 4);

    PredictionPoint {
        timestamp,
        feature_value,
        prediction_score,
        is_anomaly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::source::{FixedClock, ScriptedRandom};
    use crate::mock::{SystemClock, ThreadRandom};
    use chrono::DateTime;
    use validator::Validate;

    fn decimals(value: f64) -> usize {
        let text = value.to_string();
        text.split_once('.').map(|(_, frac)| frac.len()).unwrap_or(0)
    }

    #[test]
    fn test_scripted_anomaly() {
        let rng = ScriptedRandom::new(&[0.05, 100.0, 0.85]);
        let clock = FixedClock(DateTime::parse_from_rfc3339("2026-03-01T08:15:00+01:00").unwrap());

        let point = generate_prediction(&rng, &clock);

        assert!(point.is_anomaly);
        assert_eq!(point.feature_value, 100.0);
        assert_eq!(point.prediction_score, 0.85);
        assert_eq!(point.timestamp, clock.0);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_normal_is_rounded() {
        let rng = ScriptedRandom::new(&[0.1, 47.126, 0.333_337]);
        let clock = FixedClock(DateTime::parse_from_rfc3339("2026-03-01T08:15:00Z").unwrap());

        let point = generate_prediction(&rng, &clock);

        // 0.1 is not below the threshold
        assert!(!point.is_anomaly);
        assert_eq!(point.feature_value, 47.13);
        assert_eq!(point.prediction_score, 0.3333);
    }

    #[test]
    fn test_bands_hold_for_every_point() {
        let (rng, clock) = (ThreadRandom, SystemClock);
        for _ in 0..10_000 {
            let point = generate_prediction(&rng, &clock);
            let (feature_range, score_range) = PredictionPoint::bands(point.is_anomaly);

            assert!(feature_range.contains(&point.feature_value), "{:?}", point);
            assert!(score_range.contains(&point.prediction_score), "{:?}", point);
            assert!(point.validate().is_ok());
        }
    }

    #[test]
    fn test_anomaly_rate() {
        let (rng, clock) = (ThreadRandom, SystemClock);
        let trials = 100_000;
        let anomalies = (0..trials)
            .filter(|_| generate_prediction(&rng, &clock).is_anomaly)
            .count();

        let rate = anomalies as f64 / trials as f64;
        assert!((rate - ANOMALY_RATE).abs() < 0.015, "anomaly rate {}", rate);
    }

    #[test]
    fn test_decimal_places() {
        let (rng, clock) = (ThreadRandom, SystemClock);
        for _ in 0..10_000 {
            let point = generate_prediction(&rng, &clock);
            assert!(decimals(point.feature_value) <= 2, "{}", point.feature_value);
            assert!(decimals(point.prediction_score) <= 4, "{}", point.prediction_score);
        }
    }
}
