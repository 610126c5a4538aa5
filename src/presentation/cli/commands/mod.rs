pub mod analyze;
pub mod profile;
