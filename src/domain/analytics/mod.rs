pub mod baseline;
pub mod hourly_profile;
pub mod stats;

pub use baseline::{BaselineSet, DayBaseline};
pub use hourly_profile::{HourBucket, HourlyProfile};
pub use stats::{round_to, Stats};
