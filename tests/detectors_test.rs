#![allow(clippy::expect_used)]

use chrono::{DateTime, Utc};
use kilowatch::domain::detectors::{DetectionEngine, MIN_HISTORY};
use kilowatch::domain::entities::reading::Reading;
use kilowatch::domain::value_objects::anomaly_kind::AnomalyKind;
use kilowatch::domain::value_objects::severity::Severity;
use kilowatch::infrastructure::import::{load_dataset, Dataset};

fn load_fixture(name: &str) -> Dataset {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    load_dataset(&path).expect("Failed to load fixture")
}

fn reading(ts: &str, consumption: f64) -> Reading {
    let timestamp = DateTime::parse_from_rfc3339(ts)
        .expect("parse")
        .with_timezone(&Utc);
    Reading::new(timestamp, consumption, 20.0, 10)
}

#[test]
fn short_history_yields_no_anomalies() {
    let engine = DetectionEngine::default();
    let dataset = load_fixture("office_spike.json");
    let short: Vec<Reading> = dataset.readings.into_iter().take(MIN_HISTORY - 1).collect();
    assert!(engine.detect(&short).is_empty());
}

#[test]
fn office_spike_fixture_flags_exactly_one_spike() {
    let engine = DetectionEngine::default();
    let dataset = load_fixture("office_spike.json");
    let anomalies = engine.detect(&dataset.readings);

    assert_eq!(anomalies.len(), 1);
    let spike = &anomalies[0];
    assert_eq!(spike.kind, AnomalyKind::Spike);
    assert_eq!(spike.timestamp, dataset.readings[8].timestamp);
    assert!((spike.consumption - 180.0).abs() < f64::EPSILON);
    assert!((spike.expected - 105.0).abs() < f64::EPSILON);
    // (180 − 105) / 105 × 100 = 71.43% → 71.4 at one decimal
    assert!((spike.percentage_increase - 71.4).abs() < 1e-10);
    assert_eq!(spike.severity, Severity::High);
}

#[test]
fn detection_is_deterministic() {
    let engine = DetectionEngine::default();
    let dataset = load_fixture("office_spike.json");
    let first = engine.detect(&dataset.readings);
    let second = engine.detect(&dataset.readings);
    assert_eq!(first, second);
}

#[test]
fn flat_consumption_yields_no_anomalies() {
    let engine = DetectionEngine::default();
    let readings: Vec<Reading> = (1..=9)
        .map(|d| reading(&format!("2024-01-0{d}T12:00:00Z"), 100.0))
        .collect();
    assert!(engine.detect(&readings).is_empty());
}

#[test]
fn passes_emit_grouped_in_fixed_order() {
    // A dataset with both a spike and a drift: all spike anomalies must
    // come before all drift anomalies regardless of timestamps.
    let values = [
        100.0, 102.0, 101.0, 103.0, 102.0, 190.0, 102.0, 110.0, 120.0, 132.0, 145.0, 159.0, 175.0,
    ];
    let days = [1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 15, 16, 17];
    let readings: Vec<Reading> = values
        .iter()
        .zip(days.iter())
        .map(|(&v, &d)| reading(&format!("2024-01-{d:02}T12:00:00Z"), v))
        .collect();

    let engine = DetectionEngine::default();
    let anomalies = engine.detect(&readings);
    assert!(!anomalies.is_empty());
    let kinds: Vec<AnomalyKind> = anomalies.iter().map(|a| a.kind).collect();
    let mut sorted_by_pass = kinds.clone();
    sorted_by_pass.sort_by_key(|k| match k {
        AnomalyKind::Spike => 0,
        AnomalyKind::Drift => 1,
        AnomalyKind::Schedule => 2,
    });
    assert_eq!(kinds, sorted_by_pass);
    assert!(kinds.contains(&AnomalyKind::Spike));
    assert!(kinds.contains(&AnomalyKind::Drift));
}
