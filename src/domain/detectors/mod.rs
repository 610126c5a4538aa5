pub mod drift;
pub mod schedule;
pub mod spike;

use crate::domain::analytics::baseline::BaselineSet;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::reading::Reading;

/// Fewer readings than this and no pass has enough history to say anything.
pub const MIN_HISTORY: usize = 7;

/// One detection pass over a chronologically sorted reading sequence.
///
/// Detectors are pure functions: readings + baselines in, anomalies out.
/// No I/O, no state between calls.
pub trait Detector: Send + Sync {
    /// Returns the unique name of this pass
    fn name(&self) -> &'static str;

    /// Scans the readings against the precomputed baselines
    fn detect(&self, readings: &[Reading], baselines: &BaselineSet) -> Vec<Anomaly>;
}

/// Returns the three detection passes in their fixed emission order
#[must_use]
pub fn default_detectors() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(spike::SpikeDetector),
        Box::new(drift::DriftDetector),
        Box::new(schedule::ScheduleDetector),
    ]
}

/// Runs detection passes over a building's reading history.
pub struct DetectionEngine {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectionEngine {
    #[must_use]
    pub fn new(detectors: Vec<Box<dyn Detector>>) -> Self {
        Self { detectors }
    }

    /// Runs all passes and concatenates their output.
    ///
    /// Output order is part of the contract: passes emit in registration
    /// order, chronologically within each pass. Anomalies are never merged or
    /// re-sorted across passes.
    #[must_use]
    pub fn detect(&self, readings: &[Reading]) -> Vec<Anomaly> {
        if readings.len() < MIN_HISTORY {
            return vec![];
        }
        let baselines = BaselineSet::from_readings(readings);
        self.detectors
            .iter()
            .flat_map(|detector| detector.detect(readings, &baselines))
            .collect()
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new(default_detectors())
    }
}
