use crate::domain::analytics::baseline::BaselineSet;
use crate::domain::analytics::round_to;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::reading::Reading;
use crate::domain::value_objects::anomaly_kind::AnomalyKind;
use crate::domain::value_objects::severity::Severity;

use super::Detector;

/// Lookback steps: a window covers `WINDOW_SIZE + 1` consecutive readings.
const WINDOW_SIZE: usize = 5;
/// Minimum average increase per step, in percent.
const MIN_DAILY_INCREASE_PCT: f64 = 3.0;
/// Average increase above this is medium severity (else low).
const HIGH_DAILY_INCREASE_PCT: f64 = 5.0;
/// The window's final reading must sit this far above the day-type mean.
const BASELINE_SIGMA: f64 = 1.5;

/// Flags sustained multi-day consumption increases (gradual efficiency loss,
/// e.g. fouled heat exchangers or failing insulation).
pub struct DriftDetector;

impl Detector for DriftDetector {
    fn name(&self) -> &'static str {
        "drift"
    }

    #[allow(clippy::cast_precision_loss)]
    fn detect(&self, readings: &[Reading], baselines: &BaselineSet) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();

        for window in readings.windows(WINDOW_SIZE + 1) {
            let strictly_increasing = window
                .windows(2)
                .all(|pair| pair[1].consumption > pair[0].consumption);
            if !strictly_increasing {
                continue;
            }

            let first = &window[0];
            let last = &window[WINDOW_SIZE];
            // Strictly increasing from a non-positive start still has no
            // meaningful percentage base.
            if first.consumption <= 0.0 {
                continue;
            }

            let increase_pct =
                (last.consumption - first.consumption) / first.consumption * 100.0;
            let avg_daily_pct = increase_pct / WINDOW_SIZE as f64;
            let baseline = &baselines.for_day(last.day_type).stats;
            let abnormal_threshold = baseline.std_dev.mul_add(BASELINE_SIGMA, baseline.mean);

            if avg_daily_pct > MIN_DAILY_INCREASE_PCT && last.consumption > abnormal_threshold {
                let severity = if avg_daily_pct > HIGH_DAILY_INCREASE_PCT {
                    Severity::Medium
                } else {
                    Severity::Low
                };
                anomalies.push(Anomaly {
                    kind: AnomalyKind::Drift,
                    timestamp: last.timestamp,
                    consumption: last.consumption,
                    expected: first.consumption,
                    percentage_increase: round_to(increase_pct, 1),
                    severity,
                    description: format!(
                        "Consumption rose steadily from {:.1} to {:.1} kWh over {} readings ending {}, averaging {:.1}% per day",
                        first.consumption,
                        last.consumption,
                        WINDOW_SIZE + 1,
                        last.timestamp.format("%Y-%m-%d %H:%M"),
                        avg_daily_pct,
                    ),
                });
            }
        }

        anomalies
    }
}
