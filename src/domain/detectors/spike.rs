use crate::domain::analytics::baseline::BaselineSet;
use crate::domain::analytics::round_to;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::reading::Reading;
use crate::domain::value_objects::anomaly_kind::AnomalyKind;
use crate::domain::value_objects::severity::Severity;

use super::Detector;

/// Minimum jump over the previous reading, in percent.
const MIN_INCREASE_PCT: f64 = 30.0;
/// Jump above this is high severity.
const HIGH_INCREASE_PCT: f64 = 50.0;
/// The reading must also sit this many standard deviations above the
/// day-type mean. A jump is only a spike if it is absolutely abnormal,
/// not merely large relative to a quiet previous reading.
const BASELINE_SIGMA: f64 = 2.0;

/// Flags sudden consumption jumps versus the previous reading
/// (equipment-malfunction signal).
pub struct SpikeDetector;

impl Detector for SpikeDetector {
    fn name(&self) -> &'static str {
        "spike"
    }

    fn detect(&self, readings: &[Reading], baselines: &BaselineSet) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();

        for pair in readings.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            // A zero or negative previous reading has no meaningful percentage
            // increase; skip rather than divide by zero.
            if previous.consumption <= 0.0 {
                continue;
            }
            let increase_pct =
                (current.consumption - previous.consumption) / previous.consumption * 100.0;
            let baseline = &baselines.for_day(current.day_type).stats;
            let abnormal_threshold = baseline.std_dev.mul_add(BASELINE_SIGMA, baseline.mean);

            if increase_pct > MIN_INCREASE_PCT && current.consumption > abnormal_threshold {
                let severity = if increase_pct > HIGH_INCREASE_PCT {
                    Severity::High
                } else {
                    Severity::Medium
                };
                anomalies.push(Anomaly {
                    kind: AnomalyKind::Spike,
                    timestamp: current.timestamp,
                    consumption: current.consumption,
                    expected: previous.consumption,
                    percentage_increase: round_to(increase_pct, 1),
                    severity,
                    description: format!(
                        "Consumption of {:.1} kWh on {} is {:.1}% above the previous reading of {:.1} kWh",
                        current.consumption,
                        current.timestamp.format("%Y-%m-%d %H:%M"),
                        increase_pct,
                        previous.consumption,
                    ),
                });
            }
        }

        anomalies
    }
}
