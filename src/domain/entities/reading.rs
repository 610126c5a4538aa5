use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::day_type::DayType;

/// One timestamped energy/temperature/occupancy sample for a building.
///
/// A building's reading sequence is kept sorted ascending by timestamp by the
/// store; the detection engine assumes that invariant and does not re-verify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    /// Energy consumption in kWh.
    pub consumption: f64,
    /// Outside temperature in °C.
    pub temperature: f64,
    /// Number of occupants at sample time.
    pub occupancy: u32,
    pub day_type: DayType,
}

impl Reading {
    /// Create a reading, deriving the day type from the timestamp.
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, consumption: f64, temperature: f64, occupancy: u32) -> Self {
        Self {
            timestamp,
            consumption,
            temperature,
            occupancy,
            day_type: DayType::from_timestamp(timestamp),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .expect("parse")
            .with_timezone(&Utc)
    }

    #[test]
    fn new_derives_day_type() {
        let weekday = Reading::new(ts("2024-01-03T09:00:00Z"), 42.0, 18.5, 25);
        assert_eq!(weekday.day_type, DayType::Weekday);

        let weekend = Reading::new(ts("2024-01-06T09:00:00Z"), 12.0, 17.0, 0);
        assert_eq!(weekend.day_type, DayType::Weekend);
    }

    #[test]
    fn serde_roundtrip() {
        let reading = Reading::new(ts("2024-01-03T09:00:00Z"), 42.0, 18.5, 25);
        let json = serde_json::to_string(&reading).expect("serialize");
        let deserialized: Reading = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(reading, deserialized);
    }
}
