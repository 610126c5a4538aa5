use serde::{Deserialize, Serialize};

/// Building descriptor. Used for narrative context in recommendations; the
/// detectors never read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    /// Free-form type label, e.g. `office`, `warehouse`, `retail`.
    pub building_type: String,
    /// Heated floor area in m², when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_area_m2: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let building = Building {
            id: "bld-001".to_string(),
            name: "Riverside Office".to_string(),
            building_type: "office".to_string(),
            floor_area_m2: Some(3200.0),
        };
        let json = serde_json::to_string(&building).expect("serialize");
        let deserialized: Building = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(building, deserialized);
    }

    #[test]
    fn floor_area_is_optional() {
        let json = r#"{"id":"b1","name":"Depot","building_type":"warehouse"}"#;
        let building: Building = serde_json::from_str(json).expect("deserialize");
        assert!(building.floor_area_m2.is_none());
    }
}
