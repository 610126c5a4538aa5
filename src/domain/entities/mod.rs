pub mod anomaly;
pub mod building;
pub mod reading;
pub mod recommendation;
pub mod savings;

pub use anomaly::Anomaly;
pub use building::Building;
pub use reading::Reading;
pub use recommendation::Recommendation;
pub use savings::Savings;
