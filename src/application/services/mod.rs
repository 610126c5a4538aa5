pub mod analysis;
pub mod recommendations;
pub mod savings;
