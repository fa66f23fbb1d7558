//! Tracking service configuration.

use std::time::Duration;

use aishub_api::DEFAULT_BASE_URL;

use crate::anomaly::DEFAULT_STALE_AFTER;
use crate::rate_limiter::DEFAULT_MIN_INTERVAL;

/// Default lifetime of a cached query result.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

pub const ENV_API_KEY: &str = "AISHUB_API_KEY";
pub const ENV_BASE_URL: &str = "AISHUB_BASE_URL";
pub const ENV_CACHE_TTL_SECS: &str = "VESSEL_TRACKER_CACHE_TTL_SECS";
pub const ENV_RATE_LIMIT_MS: &str = "VESSEL_TRACKER_RATE_LIMIT_MS";
pub const ENV_STALE_AFTER_SECS: &str = "VESSEL_TRACKER_STALE_AFTER_SECS";

/// Settings for a [`crate::VesselTracker`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// AIS Hub API key. Without one the service runs in degraded mode.
    pub api_key: Option<String>,
    pub base_url: String,
    pub cache_ttl: Duration,
    pub rate_limit_interval: Duration,
    pub stale_after: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            rate_limit_interval: DEFAULT_MIN_INTERVAL,
            stale_after: DEFAULT_STALE_AFTER,
        }
    }
}

impl TrackerConfig {
    /// Reads settings from the environment, falling back to defaults for
    /// anything unset or unparsable. Blank API keys count as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var(ENV_API_KEY)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var(ENV_BASE_URL).unwrap_or(defaults.base_url),
            cache_ttl: Duration::from_secs(env_u64(
                ENV_CACHE_TTL_SECS,
                defaults.cache_ttl.as_secs(),
            )),
            rate_limit_interval: Duration::from_millis(env_u64(
                ENV_RATE_LIMIT_MS,
                defaults.rate_limit_interval.as_millis() as u64,
            )),
            stale_after: Duration::from_secs(env_u64(
                ENV_STALE_AFTER_SECS,
                defaults.stale_after.as_secs(),
            )),
        }
    }

    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn with_rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = interval;
        self
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
