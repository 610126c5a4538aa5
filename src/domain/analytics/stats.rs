use serde::{Deserialize, Serialize};

/// Descriptive statistics over a sequence of consumption values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Stats {
    pub mean: f64,
    /// Population standard deviation (squared deviations divided by count).
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Stats {
    /// Compute stats over `values`.
    ///
    /// An empty slice yields all zeros. This is the documented degenerate
    /// case, not an error: some day-type or hour buckets legitimately have no
    /// data yet.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

/// Round `value` to `decimals` decimal places (half away from zero).
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
