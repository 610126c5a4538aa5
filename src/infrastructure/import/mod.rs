pub mod json_dataset;

pub use json_dataset::{load_dataset, Dataset, ImportError};
