use serde::{Deserialize, Serialize};

/// Category of detected anomaly, one per detection pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    /// Sudden jump versus the previous reading (equipment malfunction signal).
    Spike,
    /// Sustained multi-day increase (gradual efficiency loss).
    Drift,
    /// Abnormal usage during a typically low-usage hour.
    Schedule,
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spike => write!(f, "spike"),
            Self::Drift => write!(f, "drift"),
            Self::Schedule => write!(f, "schedule"),
        }
    }
}
