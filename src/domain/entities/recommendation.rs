use serde::{Deserialize, Serialize};

use crate::domain::value_objects::anomaly_kind::AnomalyKind;

/// Actionable advice derived from one anomaly category.
///
/// The generator emits at most one recommendation per kind. Identifiers are
/// deterministic (`rec-NNN-<kind>`) so that repeated runs over the same data
/// produce identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub kind: AnomalyKind,
    pub title: String,
    pub description: String,
    /// Concrete next step for the building operator.
    pub action: String,
    /// Human-readable impact estimate with an embedded dollar figure.
    pub impact: String,
    /// Urgency tier label with guidance, e.g. "High: investigate within 24 hours".
    pub urgency: String,
}
