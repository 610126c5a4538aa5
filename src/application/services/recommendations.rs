use chrono::Timelike;

use crate::domain::analytics::round_to;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::building::Building;
use crate::domain::entities::recommendation::Recommendation;
use crate::domain::value_objects::anomaly_kind::AnomalyKind;
use crate::domain::value_objects::severity::Severity;

use super::savings::ELECTRICITY_RATE_PER_KWH;

/// Daily-excess projection horizon for spike and drift impact estimates.
const PROJECTION_DAYS: f64 = 30.0;
/// Weekly projection horizon for schedule impact estimates.
const PROJECTION_WEEKS: f64 = 4.0;
/// More schedule flags than this at one hour bumps the urgency tier.
const SCHEDULE_URGENT_COUNT: usize = 3;

/// Derive at most one recommendation per anomaly category.
///
/// The building descriptor feeds the narrative only; every number comes from
/// the anomalies. Identifiers are a monotonic per-generation sequence, so
/// repeated runs over the same input produce identical output.
#[must_use]
pub fn generate(anomalies: &[Anomaly], building: &Building) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = [
        spike_recommendation(anomalies, building),
        drift_recommendation(anomalies, building),
        schedule_recommendation(anomalies, building),
    ]
    .into_iter()
    .flatten()
    .collect();

    for (index, rec) in recommendations.iter_mut().enumerate() {
        rec.id = format!("rec-{:03}-{}", index + 1, rec.kind);
    }
    recommendations
}

/// Most severe spike, first occurrence winning ties (first-max scan).
fn spike_recommendation(anomalies: &[Anomaly], building: &Building) -> Option<Recommendation> {
    let mut chosen: Option<&Anomaly> = None;
    for anomaly in anomalies.iter().filter(|a| a.kind == AnomalyKind::Spike) {
        match chosen {
            Some(best) if anomaly.severity <= best.severity => {}
            _ => chosen = Some(anomaly),
        }
    }
    let spike = chosen?;

    let dollars = monthly_excess_dollars(spike);
    let urgency = if spike.severity == Severity::High {
        urgency_label(Severity::High)
    } else {
        urgency_label(Severity::Medium)
    };
    let date = spike.timestamp.format("%Y-%m-%d");
    Some(Recommendation {
        id: String::new(),
        kind: AnomalyKind::Spike,
        title: "Investigate sudden consumption spike".to_string(),
        description: format!(
            "{} jumped to {:.1} kWh on {date}, {:.1}% above the previous reading",
            building.name, spike.consumption, spike.percentage_increase,
        ),
        action: format!("Inspect HVAC and major equipment for malfunction around {date}"),
        impact: format!("~${dollars:.0} per month if the excess recurs daily"),
        urgency,
    })
}

/// Most recent drift window; equal timestamps keep the earlier anomaly.
fn drift_recommendation(anomalies: &[Anomaly], building: &Building) -> Option<Recommendation> {
    let mut chosen: Option<&Anomaly> = None;
    for anomaly in anomalies.iter().filter(|a| a.kind == AnomalyKind::Drift) {
        match chosen {
            Some(best) if anomaly.timestamp <= best.timestamp => {}
            _ => chosen = Some(anomaly),
        }
    }
    let drift = chosen?;

    let dollars = monthly_excess_dollars(drift);
    let urgency = if drift.severity == Severity::Medium {
        urgency_label(Severity::Medium)
    } else {
        urgency_label(Severity::Low)
    };
    Some(Recommendation {
        id: String::new(),
        kind: AnomalyKind::Drift,
        title: "Reverse gradual consumption drift".to_string(),
        description: format!(
            "{} has climbed steadily from {:.1} to {:.1} kWh as of {} (+{:.1}%)",
            building.name,
            drift.expected,
            drift.consumption,
            drift.timestamp.format("%Y-%m-%d"),
            drift.percentage_increase,
        ),
        action: "Check HVAC filters, setpoints and insulation for degradation".to_string(),
        impact: format!("~${dollars:.0} per month if the drift continues"),
        urgency,
    })
}

/// Hour with the most schedule flags, first-seen hour winning ties.
#[allow(clippy::cast_precision_loss)]
fn schedule_recommendation(anomalies: &[Anomaly], building: &Building) -> Option<Recommendation> {
    // Group by hour preserving first-seen order, so the tie-break is explicit
    // rather than an accident of map iteration order.
    let mut by_hour: Vec<(u32, Vec<&Anomaly>)> = Vec::new();
    for anomaly in anomalies.iter().filter(|a| a.kind == AnomalyKind::Schedule) {
        let hour = anomaly.timestamp.hour();
        match by_hour.iter_mut().find(|(h, _)| *h == hour) {
            Some((_, group)) => group.push(anomaly),
            None => by_hour.push((hour, vec![anomaly])),
        }
    }

    let mut chosen: Option<&(u32, Vec<&Anomaly>)> = None;
    for entry in &by_hour {
        match chosen {
            Some(best) if entry.1.len() <= best.1.len() => {}
            _ => chosen = Some(entry),
        }
    }
    let (hour, group) = chosen?;
    let count = group.len();

    let avg_excess = group.iter().map(|a| a.excess()).sum::<f64>() / count as f64;
    let dollars = round_to(
        avg_excess * count as f64 * PROJECTION_WEEKS * ELECTRICITY_RATE_PER_KWH,
        0,
    );
    let urgency = if count > SCHEDULE_URGENT_COUNT {
        urgency_label(Severity::Medium)
    } else {
        urgency_label(Severity::Low)
    };
    Some(Recommendation {
        id: String::new(),
        kind: AnomalyKind::Schedule,
        title: "Curb off-hours energy use".to_string(),
        description: format!(
            "{count} off-hours readings flagged around {hour:02}:00 at {}, averaging {avg_excess:.1} kWh above the typical level",
            building.name,
        ),
        action: format!("Review lighting and HVAC schedules around {hour:02}:00"),
        impact: format!("~${dollars:.0} over the next four weeks"),
        urgency,
    })
}

fn monthly_excess_dollars(anomaly: &Anomaly) -> f64 {
    round_to(
        anomaly.excess() * PROJECTION_DAYS * ELECTRICITY_RATE_PER_KWH,
        0,
    )
}

fn urgency_label(severity: Severity) -> String {
    match severity {
        Severity::High => "High: investigate within 24 hours".to_string(),
        Severity::Medium => "Medium: investigate this week".to_string(),
        Severity::Low => "Low: review at the next maintenance walkthrough".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s)
            .expect("parse")
            .with_timezone(&Utc)
    }

    fn building() -> Building {
        Building {
            id: "b1".to_string(),
            name: "Riverside Office".to_string(),
            building_type: "office".to_string(),
            floor_area_m2: None,
        }
    }

    fn anomaly(
        kind: AnomalyKind,
        time: &str,
        consumption: f64,
        expected: f64,
        severity: Severity,
    ) -> Anomaly {
        Anomaly {
            kind,
            timestamp: ts(time),
            consumption,
            expected,
            percentage_increase: 0.0,
            severity,
            description: String::new(),
        }
    }

    #[test]
    fn empty_anomalies_yield_no_recommendations() {
        assert!(generate(&[], &building()).is_empty());
    }

    #[test]
    fn one_recommendation_per_category() {
        let anomalies = vec![
            anomaly(AnomalyKind::Spike, "2024-01-09T12:00:00Z", 180.0, 105.0, Severity::High),
            anomaly(AnomalyKind::Spike, "2024-01-10T12:00:00Z", 150.0, 110.0, Severity::Medium),
            anomaly(AnomalyKind::Drift, "2024-01-12T12:00:00Z", 126.0, 101.0, Severity::Low),
            anomaly(AnomalyKind::Schedule, "2024-01-12T02:00:00Z", 9.0, 2.7, Severity::Medium),
        ];
        let recs = generate(&anomalies, &building());
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].kind, AnomalyKind::Spike);
        assert_eq!(recs[1].kind, AnomalyKind::Drift);
        assert_eq!(recs[2].kind, AnomalyKind::Schedule);
    }

    #[test]
    fn ids_are_deterministic_sequence() {
        let anomalies = vec![
            anomaly(AnomalyKind::Drift, "2024-01-12T12:00:00Z", 126.0, 101.0, Severity::Low),
            anomaly(AnomalyKind::Schedule, "2024-01-12T02:00:00Z", 9.0, 2.7, Severity::Medium),
        ];
        let recs = generate(&anomalies, &building());
        assert_eq!(recs[0].id, "rec-001-drift");
        assert_eq!(recs[1].id, "rec-002-schedule");

        let again = generate(&anomalies, &building());
        assert_eq!(recs, again);
    }

    #[test]
    fn spike_picks_highest_severity_first_occurrence_on_tie() {
        let anomalies = vec![
            anomaly(AnomalyKind::Spike, "2024-01-09T12:00:00Z", 150.0, 110.0, Severity::Medium),
            anomaly(AnomalyKind::Spike, "2024-01-10T12:00:00Z", 180.0, 105.0, Severity::High),
            anomaly(AnomalyKind::Spike, "2024-01-11T12:00:00Z", 190.0, 100.0, Severity::High),
        ];
        let recs = generate(&anomalies, &building());
        assert_eq!(recs.len(), 1);
        // First High wins the tie: 180 − 105 = 75 kWh excess.
        // 75 × 30 × 0.15 = $338 (rounded)
        assert!(recs[0].impact.contains("$338"));
        assert!(recs[0].urgency.starts_with("High"));
        assert!(recs[0].description.contains("2024-01-10"));
    }

    #[test]
    fn spike_medium_severity_gets_medium_urgency() {
        let anomalies = vec![anomaly(
            AnomalyKind::Spike,
            "2024-01-09T12:00:00Z",
            150.0,
            110.0,
            Severity::Medium,
        )];
        let recs = generate(&anomalies, &building());
        assert!(recs[0].urgency.starts_with("Medium"));
    }

    #[test]
    fn drift_picks_most_recent() {
        let anomalies = vec![
            anomaly(AnomalyKind::Drift, "2024-01-10T12:00:00Z", 120.0, 100.0, Severity::Medium),
            anomaly(AnomalyKind::Drift, "2024-01-12T12:00:00Z", 126.0, 101.0, Severity::Low),
        ];
        let recs = generate(&anomalies, &building());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].description.contains("2024-01-12"));
        // Low severity drift → low urgency tier
        assert!(recs[0].urgency.starts_with("Low"));
        // (126 − 101) × 30 × 0.15 = $113 (rounded)
        assert!(recs[0].impact.contains("$113"));
    }

    #[test]
    fn drift_medium_severity_gets_medium_urgency() {
        let anomalies = vec![anomaly(
            AnomalyKind::Drift,
            "2024-01-12T12:00:00Z",
            161.0,
            101.0,
            Severity::Medium,
        )];
        let recs = generate(&anomalies, &building());
        assert!(recs[0].urgency.starts_with("Medium"));
    }

    #[test]
    fn schedule_picks_hour_with_most_flags_first_seen_on_tie() {
        let anomalies = vec![
            anomaly(AnomalyKind::Schedule, "2024-01-08T02:00:00Z", 9.0, 3.0, Severity::Medium),
            anomaly(AnomalyKind::Schedule, "2024-01-08T22:00:00Z", 8.0, 3.0, Severity::Medium),
            anomaly(AnomalyKind::Schedule, "2024-01-09T02:00:00Z", 10.0, 3.0, Severity::Medium),
            anomaly(AnomalyKind::Schedule, "2024-01-09T22:00:00Z", 7.0, 3.0, Severity::Medium),
        ];
        // Tie between 02:00 and 22:00 (two flags each): 02:00 was seen first.
        let recs = generate(&anomalies, &building());
        assert_eq!(recs.len(), 1);
        assert!(recs[0].description.contains("02:00"));
        assert!(recs[0].action.contains("02:00"));
        // avg excess at 02:00 = ((9−3) + (10−3)) / 2 = 6.5
        // 6.5 × 2 × 4 × 0.15 = $8 (rounded)
        assert!(recs[0].impact.contains("$8"));
        // Two flags → low urgency tier
        assert!(recs[0].urgency.starts_with("Low"));
    }

    #[test]
    fn many_schedule_flags_bump_urgency() {
        let anomalies: Vec<Anomaly> = (8..=11)
            .map(|d| {
                anomaly(
                    AnomalyKind::Schedule,
                    &format!("2024-01-{d:02}T02:00:00Z"),
                    9.0,
                    3.0,
                    Severity::Medium,
                )
            })
            .collect();
        let recs = generate(&anomalies, &building());
        assert_eq!(recs.len(), 1);
        // Four flags at one hour → medium urgency
        assert!(recs[0].urgency.starts_with("Medium"));
    }

    #[test]
    fn building_name_appears_in_description() {
        let anomalies = vec![anomaly(
            AnomalyKind::Spike,
            "2024-01-09T12:00:00Z",
            180.0,
            105.0,
            Severity::High,
        )];
        let recs = generate(&anomalies, &building());
        assert!(recs[0].description.contains("Riverside Office"));
    }
}
