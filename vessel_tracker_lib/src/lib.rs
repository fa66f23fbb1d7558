//! Library layer for the vessel tracker: cached, rate-limited AIS Hub access
//! and suspicious-vessel alerts.
//!
//! Wraps the `aishub_api` crate with an in-memory TTL cache, request pacing
//! shared by every caller, input validation, named regions, and the anomaly
//! heuristics behind the alert query.

pub mod anomaly;
pub mod cache;
pub mod config;
pub mod error;
pub mod rate_limiter;
pub mod regions;
pub mod tracker;
pub mod validation;

pub use aishub_api;
pub use aishub_api::types;
pub use aishub_api::types::{BoundingBox, Vessel};

pub use anomaly::{AlertReason, AnomalyFilter};
pub use cache::CacheStats;
pub use config::TrackerConfig;
pub use error::{ErrorKind, ServiceError, TrackerError};
pub use rate_limiter::TrackerSummary;
pub use regions::{Region, RegionError};
pub use tracker::{VesselAlert, VesselTracker};
