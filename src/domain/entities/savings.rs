use serde::{Deserialize, Serialize};

/// Aggregate savings estimate over a set of anomalies.
///
/// Deltas are not clamped: an anomaly whose consumption sits below its
/// expected value reduces the total, so all three figures can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Savings {
    /// Recoverable energy in kWh, rounded to 1 decimal.
    pub energy_kwh: f64,
    /// Dollar value at the fixed tariff, rounded to 2 decimals.
    pub cost: f64,
    /// Avoidable emissions in kg CO2, rounded to 1 decimal.
    pub carbon_kg: f64,
}
