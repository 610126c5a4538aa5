use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::entities::building::Building;
use crate::domain::entities::reading::Reading;
use crate::domain::value_objects::day_type::DayType;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reading {index}: {reason}")]
    InvalidReading { index: usize, reason: String },
}

/// A building plus its reading history, ready for analysis.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub building: Building,
    pub readings: Vec<Reading>,
}

/// Raw reading record as it appears on disk. `day_type` is optional and
/// derived from the timestamp when absent.
#[derive(Debug, Deserialize)]
struct RawReading {
    timestamp: DateTime<Utc>,
    consumption: f64,
    temperature: f64,
    occupancy: u32,
    #[serde(default)]
    day_type: Option<DayType>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    building: Building,
    readings: Vec<RawReading>,
}

/// Load and validate a JSON dataset file.
///
/// Input validation is this layer's job, not the engine's: non-finite numeric
/// fields are rejected here, and the returned readings are sorted ascending
/// by timestamp so the engine's ordering invariant holds.
///
/// # Errors
///
/// Returns `ImportError` if the file cannot be read, is not valid JSON, or
/// contains a reading with non-finite consumption or temperature.
pub fn load_dataset(path: &Path) -> Result<Dataset, ImportError> {
    let content = std::fs::read_to_string(path)?;
    parse_dataset(&content)
}

/// Parse a JSON dataset from a string. Same validation as [`load_dataset`].
///
/// # Errors
///
/// Returns `ImportError` on malformed JSON or non-finite numeric fields.
pub fn parse_dataset(content: &str) -> Result<Dataset, ImportError> {
    let raw: RawDataset = serde_json::from_str(content)?;

    let mut readings = Vec::with_capacity(raw.readings.len());
    for (index, record) in raw.readings.into_iter().enumerate() {
        if !record.consumption.is_finite() {
            return Err(ImportError::InvalidReading {
                index,
                reason: "consumption is not a finite number".to_string(),
            });
        }
        if !record.temperature.is_finite() {
            return Err(ImportError::InvalidReading {
                index,
                reason: "temperature is not a finite number".to_string(),
            });
        }
        let day_type = record
            .day_type
            .unwrap_or_else(|| DayType::from_timestamp(record.timestamp));
        readings.push(Reading {
            timestamp: record.timestamp,
            consumption: record.consumption,
            temperature: record.temperature,
            occupancy: record.occupancy,
            day_type,
        });
    }
    readings.sort_by_key(|r| r.timestamp);

    Ok(Dataset {
        building: raw.building,
        readings,
    })
}
