use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::anomaly_kind::AnomalyKind;
use crate::domain::value_objects::severity::Severity;

/// One flagged abnormal reading, immutable once produced.
///
/// Passes never merge or deduplicate, so the same reading can appear in
/// several anomalies of different kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub timestamp: DateTime<Utc>,
    /// Observed consumption in kWh.
    pub consumption: f64,
    /// Reference value the observation is compared against: the previous
    /// reading for spikes, the window start for drift, the hourly mean for
    /// schedule anomalies.
    pub expected: f64,
    /// Increase over `expected`, rounded to one decimal.
    pub percentage_increase: f64,
    pub severity: Severity,
    pub description: String,
}

impl Anomaly {
    /// Excess consumption versus the expected value, in kWh. May be negative.
    #[must_use]
    pub fn excess(&self) -> f64 {
        self.consumption - self.expected
    }
}
