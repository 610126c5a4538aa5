use serde::{Deserialize, Serialize};

use crate::domain::analytics::hourly_profile::HourlyProfile;
use crate::domain::analytics::stats::Stats;
use crate::domain::entities::reading::Reading;
use crate::domain::value_objects::day_type::DayType;

/// Baseline references for one day type: overall consumption stats plus the
/// per-hour profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayBaseline {
    pub stats: Stats,
    pub profile: HourlyProfile,
}

/// Weekday and weekend baselines computed once per detection run.
///
/// Weekday and weekend usage patterns are stratified so that a quiet Sunday
/// never drags down the weekday reference (and vice versa).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BaselineSet {
    weekday: DayBaseline,
    weekend: DayBaseline,
}

impl BaselineSet {
    /// Partition readings by day type and compute both baselines.
    #[must_use]
    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            weekday: Self::day_baseline(readings, DayType::Weekday),
            weekend: Self::day_baseline(readings, DayType::Weekend),
        }
    }

    fn day_baseline(readings: &[Reading], day_type: DayType) -> DayBaseline {
        let subset: Vec<&Reading> = readings.iter().filter(|r| r.day_type == day_type).collect();
        let values: Vec<f64> = subset.iter().map(|r| r.consumption).collect();
        DayBaseline {
            stats: Stats::from_values(&values),
            profile: HourlyProfile::build(subset.iter().copied()),
        }
    }

    #[must_use]
    pub fn for_day(&self, day_type: DayType) -> &DayBaseline {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }
}
