//! Historical report generator

use chrono::Duration;

use super::{Clock, RandomSource};
use crate::models::{ReportRecord, Severity, REPORT_BATCH_SIZE, SENSOR_GROUPS};

/// Generate a batch of synthetic past incidents, ids `1..=5` in order
pub fn generate_reports(rng: &dyn RandomSource, clock: &dyn Clock) -> Vec<ReportRecord> {
    let now = clock.now();

    (1..=REPORT_BATCH_SIZE as u32)
        .map(|id| {
            let days = rng.int_inclusive(1, 30);
            let hours = rng.int_inclusive(1, 23);
            let severity = Severity::ALL[rng.index(Severity::ALL.len())];
            let group = SENSOR_GROUPS[rng.index(SENSOR_GROUPS.len())];

            ReportRecord {
                id,
                timestamp: now - Duration::days(days) - Duration::hours(hours),
                severity,
                description: ReportRecord::describe(group, severity),
            }
        })
        .collect()
}
