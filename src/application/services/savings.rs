use crate::domain::analytics::round_to;
use crate::domain::entities::anomaly::Anomaly;
use crate::domain::entities::savings::Savings;

/// Fixed electricity tariff used for all dollar figures, $/kWh.
pub const ELECTRICITY_RATE_PER_KWH: f64 = 0.15;
/// Fixed grid emission factor, kg CO2 per kWh.
pub const CARBON_KG_PER_KWH: f64 = 0.4;

/// Estimate the energy, cost and carbon that could be saved by eliminating
/// the flagged anomalies.
///
/// Deltas are summed unclamped: an anomaly whose consumption is below its
/// expected value reduces the total, so the result can be negative.
#[must_use]
pub fn estimate(anomalies: &[Anomaly]) -> Savings {
    let excess: f64 = anomalies.iter().map(Anomaly::excess).sum();
    Savings {
        energy_kwh: round_to(excess, 1),
        cost: round_to(excess * ELECTRICITY_RATE_PER_KWH, 2),
        carbon_kg: round_to(excess * CARBON_KG_PER_KWH, 1),
    }
}
