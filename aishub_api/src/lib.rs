//! Typed client for the AIS Hub vessel-position API.
//!
//! Builds area and single-vessel requests, parses the provider's JSON
//! envelope, and normalizes raw records into [`types::Vessel`].

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::{Error, ErrorKind};
pub use self::query::{AreaQuery, Query, VesselQuery};
