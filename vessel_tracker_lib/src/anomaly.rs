//! Heuristic flagging of suspicious vessels.
//!
//! A vessel is suspicious when any of these hold:
//! - it broadcasts no name (or only the "Unknown Vessel" placeholder)
//! - it is stopped in what the coordinate heuristic calls open ocean
//! - its last position report is missing or older than the staleness threshold
//!
//! The open-ocean test is a deliberately crude stand-in for coastline data:
//! a position is "near coast" only when both `|lat % 10|` and `|lon % 10|`
//! are below 2.

use std::time::Duration;

use aishub_api::types::Vessel;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

/// Reports older than this are considered stale by default.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(30 * 60);

/// Remainder below which a coordinate counts as near a coastline.
const NEAR_COAST_REMAINDER: f64 = 2.0;

/// Why a vessel was flagged.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertReason {
    MissingName,
    StoppedInOpenOcean,
    StaleSignal,
}

impl std::fmt::Display for AlertReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AlertReason::MissingName => "no name",
            AlertReason::StoppedInOpenOcean => "stopped in open ocean",
            AlertReason::StaleSignal => "stale signal",
        };
        f.write_str(label)
    }
}

/// Classifies vessels against the suspicious-behavior heuristics.
#[derive(Debug, Clone, Copy)]
pub struct AnomalyFilter {
    stale_after: Duration,
}

impl Default for AnomalyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STALE_AFTER)
    }
}

impl AnomalyFilter {
    pub fn new(stale_after: Duration) -> Self {
        Self { stale_after }
    }

    /// Every heuristic the vessel matches at `now`, in a fixed order.
    pub fn reasons(&self, vessel: &Vessel, now: DateTime<Utc>) -> Vec<AlertReason> {
        let mut reasons = Vec::new();
        if !vessel.has_known_name() {
            reasons.push(AlertReason::MissingName);
        }
        if vessel.speed == 0.0 && is_open_ocean(vessel.latitude, vessel.longitude) {
            reasons.push(AlertReason::StoppedInOpenOcean);
        }
        if self.has_no_signal(vessel.timestamp.as_deref(), now) {
            reasons.push(AlertReason::StaleSignal);
        }
        reasons
    }

    pub fn is_suspicious(&self, vessel: &Vessel, now: DateTime<Utc>) -> bool {
        !self.reasons(vessel, now).is_empty()
    }

    /// The suspicious subset of `vessels`, in input order.
    pub fn filter(&self, vessels: &[Vessel], now: DateTime<Utc>) -> Vec<Vessel> {
        vessels
            .iter()
            .filter(|v| self.is_suspicious(v, now))
            .cloned()
            .collect()
    }

    /// Missing timestamps count as no signal. Timestamps that cannot be
    /// parsed are not treated as stale.
    fn has_no_signal(&self, timestamp: Option<&str>, now: DateTime<Utc>) -> bool {
        let Some(raw) = timestamp else {
            return true;
        };
        let Some(reported) = parse_report_time(raw) else {
            tracing::debug!("Unparseable report timestamp {:?}", raw);
            return false;
        };
        match (now - reported).to_std() {
            Ok(age) => age > self.stale_after,
            // Reported in the future
            Err(_) => false,
        }
    }
}

/// Whether a position is "open ocean" under the modulo-10 heuristic.
pub fn is_open_ocean(latitude: f64, longitude: f64) -> bool {
    let lat_mod = (latitude % 10.0).abs();
    let lon_mod = (longitude % 10.0).abs();
    let near_coast = lat_mod < NEAR_COAST_REMAINDER && lon_mod < NEAR_COAST_REMAINDER;
    !near_coast
}

/// Parses the report time formats seen from the provider: RFC 3339,
/// `YYYY-MM-DD HH:MM:SS` with an optional `GMT`/`UTC` suffix (read as UTC),
/// and unix seconds.
pub fn parse_report_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = raw
        .trim_end_matches("GMT")
        .trim_end_matches("UTC")
        .trim_end();
    if let Ok(dt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&dt));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
