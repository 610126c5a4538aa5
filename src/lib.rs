//! kilowatch — building energy anomaly detection and savings insights.
//!
//! The crate is organized in hexagonal layers:
//! - `domain`: pure detection engine (statistics, detectors, entities, ports)
//! - `application`: orchestration services and configuration
//! - `infrastructure`: storage and dataset import adapters
//! - `presentation`: CLI commands and formatters

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
