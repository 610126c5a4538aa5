pub mod store;

pub use store::{BuildingStore, ReadingStore, StoreError};
