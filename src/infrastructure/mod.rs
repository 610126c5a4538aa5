pub mod import;
pub mod persistence;
