//! Mock data generation
//!
//! Synthetic predictions and incident reports. Every generator takes its
//! randomness and time explicitly so tests can script both.

pub mod source;
pub mod prediction;
pub mod report;

pub use source::{Clock, RandomSource, SystemClock, ThreadRandom};
pub use prediction::generate_prediction;
pub use report::generate_reports;

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(51.23456, 2), 51.23);
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(100.0, 2), 100.0);
    }
}
