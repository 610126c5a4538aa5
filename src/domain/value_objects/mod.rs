pub mod anomaly_kind;
pub mod day_type;
pub mod severity;

pub use anomaly_kind::AnomalyKind;
pub use day_type::DayType;
pub use severity::Severity;
