use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::building::Building;
use crate::domain::entities::reading::Reading;
use crate::domain::ports::store::{BuildingStore, ReadingStore, StoreError};

/// In-memory building registry and reading history.
///
/// Readings are kept sorted ascending by timestamp on insert, so snapshots
/// handed to the engine always satisfy its ordering invariant.
pub struct InMemoryStore {
    buildings: Mutex<Vec<Building>>,
    readings: Mutex<HashMap<String, Vec<Reading>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buildings: Mutex::new(Vec::new()),
            readings: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingStore for InMemoryStore {
    fn save_building(&self, building: &Building) -> Result<(), StoreError> {
        let mut buildings = self
            .buildings
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        if let Some(existing) = buildings.iter_mut().find(|b| b.id == building.id) {
            *existing = building.clone();
        } else {
            buildings.push(building.clone());
            drop(buildings);
            self.readings
                .lock()
                .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?
                .entry(building.id.clone())
                .or_default();
        }
        Ok(())
    }

    fn get_building(&self, id: &str) -> Result<Option<Building>, StoreError> {
        Ok(self
            .buildings
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    fn list_buildings(&self) -> Result<Vec<Building>, StoreError> {
        Ok(self
            .buildings
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .clone())
    }
}

impl ReadingStore for InMemoryStore {
    fn append_readings(&self, building_id: &str, readings: &[Reading]) -> Result<(), StoreError> {
        let mut map = self
            .readings
            .lock()
            .map_err(|_| StoreError::WriteFailed("lock poisoned".into()))?;
        let history = map
            .get_mut(building_id)
            .ok_or_else(|| StoreError::BuildingNotFound(building_id.to_string()))?;
        history.extend_from_slice(readings);
        // Stable sort: equal timestamps keep their insertion order.
        history.sort_by_key(|r| r.timestamp);
        Ok(())
    }

    fn get_readings(&self, building_id: &str) -> Result<Vec<Reading>, StoreError> {
        self.readings
            .lock()
            .map_err(|_| StoreError::ReadFailed("lock poisoned".into()))?
            .get(building_id)
            .cloned()
            .ok_or_else(|| StoreError::BuildingNotFound(building_id.to_string()))
    }
}
