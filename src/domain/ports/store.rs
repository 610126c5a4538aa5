use thiserror::Error;

use crate::domain::entities::building::Building;
use crate::domain::entities::reading::Reading;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    ReadFailed(String),
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    #[error("building not found: {0}")]
    BuildingNotFound(String),
}

/// Registry of buildings, keyed by building id.
pub trait BuildingStore: Send + Sync {
    /// Register or update a building.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write operation fails.
    fn save_building(&self, building: &Building) -> Result<(), StoreError>;

    /// Look up a building by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn get_building(&self, id: &str) -> Result<Option<Building>, StoreError>;

    /// List all registered buildings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the read operation fails.
    fn list_buildings(&self) -> Result<Vec<Building>, StoreError>;
}

/// Per-building reading history.
///
/// Implementations must hand out snapshots sorted ascending by timestamp;
/// the detection engine relies on that invariant and does not re-verify it.
pub trait ReadingStore: Send + Sync {
    /// Append readings to a building's history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BuildingNotFound` for an unknown building id, or
    /// if the write operation fails.
    fn append_readings(&self, building_id: &str, readings: &[Reading]) -> Result<(), StoreError>;

    /// A consistent, chronologically sorted snapshot of a building's readings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BuildingNotFound` for an unknown building id, or
    /// if the read operation fails.
    fn get_readings(&self, building_id: &str) -> Result<Vec<Reading>, StoreError>;
}
