//! Historical report model

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Number of records in one report batch
pub const REPORT_BATCH_SIZE: usize = 5;

/// Sensor groups an incident can be attributed to
pub const SENSOR_GROUPS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

const DESCRIPTION_PREFIX: &str = "Anomaly detected on sensor group ";
const DESCRIPTION_SEVERITY: &str = " with severity: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic historical incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_description"))]
pub struct ReportRecord {
    #[validate(range(min = 1))]
    pub id: u32,
    pub timestamp: DateTime<FixedOffset>,
    pub severity: Severity,
    pub description: String,
}

impl ReportRecord {
    /// Build the incident description for a sensor group
    pub fn describe(group: char, severity: Severity) -> String {
        format!("{}{}{}{}", DESCRIPTION_PREFIX, group, DESCRIPTION_SEVERITY, severity)
    }

    /// Sensor group named in the description, if it is well formed
    pub fn sensor_group(&self) -> Option<char> {
        let rest = self.description.strip_prefix(DESCRIPTION_PREFIX)?;
        let mut chars = rest.chars();
        let group = chars.next()?;
        let tail = chars.as_str().strip_prefix(DESCRIPTION_SEVERITY)?;

        if SENSOR_GROUPS.contains(&group) && tail == self.severity.as_str() {
            Some(group)
        } else {
            None
        }
    }
}

fn validate_description(record: &ReportRecord) -> Result<(), ValidationError> {
    match record.sensor_group() {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("malformed_description")),
    }
}
