use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::domain::analytics::stats::Stats;
use crate::domain::entities::reading::Reading;

/// Minimum samples before an hour bucket is statistically reliable.
/// Buckets below this are still populated; consumers skip them.
pub const MIN_RELIABLE_SAMPLES: usize = 3;

/// Consumption statistics for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct HourBucket {
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// Per-hour consumption statistics for one day type.
///
/// All 24 hours are always present; hours with no samples carry zeroed stats
/// and a count of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyProfile {
    hours: [HourBucket; 24],
}

impl HourlyProfile {
    /// Build a profile by bucketing readings on their hour of day.
    ///
    /// The caller is expected to have filtered readings to a single day type;
    /// the builder itself is day-type agnostic.
    #[must_use]
    pub fn build<'a, I>(readings: I) -> Self
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        let mut values: [Vec<f64>; 24] = std::array::from_fn(|_| Vec::new());
        for reading in readings {
            let hour = reading.timestamp.hour() as usize;
            values[hour].push(reading.consumption);
        }

        let hours = std::array::from_fn(|h| {
            let stats = Stats::from_values(&values[h]);
            HourBucket {
                mean: stats.mean,
                std_dev: stats.std_dev,
                count: values[h].len(),
            }
        });
        Self { hours }
    }

    /// Bucket for `hour` (0–23).
    ///
    /// # Panics
    ///
    /// Panics if `hour > 23`; callers pass `chrono` hours which are in range.
    #[must_use]
    pub fn bucket(&self, hour: u32) -> &HourBucket {
        &self.hours[hour as usize]
    }

    /// Arithmetic mean of all 24 hourly means, empty hours included as zero.
    ///
    /// This is the reference point for the "typically low-usage hour" test in
    /// schedule detection.
    #[must_use]
    pub fn overall_hourly_mean(&self) -> f64 {
        self.hours.iter().map(|b| b.mean).sum::<f64>() / 24.0
    }

    /// Iterate buckets in hour order (0–23).
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (u32, &HourBucket)> {
        self.hours.iter().enumerate().map(|(h, b)| (h as u32, b))
    }
}

impl Default for HourlyProfile {
    fn default() -> Self {
        Self {
            hours: [HourBucket::default(); 24],
        }
    }
}
