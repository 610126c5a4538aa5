use serde::Serialize;

use crate::domain::detectors::DetectionEngine;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::building::Building;
use crate::domain::entities::reading::Reading;
use crate::domain::entities::recommendation::Recommendation;
use crate::domain::entities::savings::Savings;

use super::{recommendations, savings};

/// Full analysis output for one building: the flat anomaly list plus the
/// insights derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub building: Building,
    pub anomalies: Vec<Anomaly>,
    pub recommendations: Vec<Recommendation>,
    pub savings: Savings,
}

/// Runs the detection engine and derives recommendations and savings.
///
/// Stateless: every call is a pure function of its arguments, so analyses of
/// different buildings can run in parallel without coordination.
pub struct AnalysisService {
    engine: DetectionEngine,
}

impl AnalysisService {
    #[must_use]
    pub fn new(engine: DetectionEngine) -> Self {
        Self { engine }
    }

    /// Analyze a chronologically sorted reading history.
    #[must_use]
    pub fn analyze(&self, building: &Building, readings: &[Reading]) -> AnalysisReport {
        tracing::debug!(
            building = %building.id,
            readings = readings.len(),
            "running detection passes"
        );
        let anomalies = self.engine.detect(readings);
        tracing::debug!(
            building = %building.id,
            anomalies = anomalies.len(),
            "detection finished"
        );

        let recommendations = recommendations::generate(&anomalies, building);
        let savings = savings::estimate(&anomalies);

        AnalysisReport {
            building: building.clone(),
            anomalies,
            recommendations,
            savings,
        }
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(DetectionEngine::default())
    }
}
