use chrono::Timelike;

use crate::domain::analytics::baseline::BaselineSet;
use crate::domain::analytics::hourly_profile::MIN_RELIABLE_SAMPLES;
use crate::domain::analytics::round_to;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::reading::Reading;
use crate::domain::value_objects::anomaly_kind::AnomalyKind;
use crate::domain::value_objects::severity::Severity;

use super::Detector;

/// The reading must exceed its hour's mean by this many standard deviations.
const HOURLY_SIGMA: f64 = 2.5;
/// Only hours whose mean is below this fraction of the all-hour average are
/// eligible. A legitimately busy hour running slightly over its own mean is
/// never an off-hours anomaly.
const LOW_USAGE_RATIO: f64 = 0.7;
/// Excess above this percentage of the hourly mean is medium severity.
const HIGH_INCREASE_PCT: f64 = 70.0;

/// Flags abnormal consumption during hours that are normally quiet
/// (lights or HVAC left running overnight, weekend equipment use).
pub struct ScheduleDetector;

impl Detector for ScheduleDetector {
    fn name(&self) -> &'static str {
        "schedule"
    }

    fn detect(&self, readings: &[Reading], baselines: &BaselineSet) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();

        for reading in readings {
            let profile = &baselines.for_day(reading.day_type).profile;
            let hour = reading.timestamp.hour();
            let bucket = profile.bucket(hour);
            // Too few samples to trust this hour's statistics.
            if bucket.count < MIN_RELIABLE_SAMPLES {
                continue;
            }
            // An hour with a zero mean has no percentage base.
            if bucket.mean <= 0.0 {
                continue;
            }

            let abnormal_threshold = bucket.std_dev.mul_add(HOURLY_SIGMA, bucket.mean);
            let typically_quiet = bucket.mean < LOW_USAGE_RATIO * profile.overall_hourly_mean();

            if reading.consumption > abnormal_threshold && typically_quiet {
                let increase_pct = (reading.consumption - bucket.mean) / bucket.mean * 100.0;
                let severity = if increase_pct > HIGH_INCREASE_PCT {
                    Severity::Medium
                } else {
                    Severity::Low
                };
                anomalies.push(Anomaly {
                    kind: AnomalyKind::Schedule,
                    timestamp: reading.timestamp,
                    consumption: reading.consumption,
                    expected: bucket.mean,
                    percentage_increase: round_to(increase_pct, 1),
                    severity,
                    description: format!(
                        "Consumption of {:.1} kWh at {:02}:00 on {} far exceeds the typical {:.1} kWh for that hour",
                        reading.consumption,
                        hour,
                        reading.timestamp.format("%Y-%m-%d"),
                        bucket.mean,
                    ),
                });
            }
        }

        anomalies
    }
}
