//! Caching and rate-limiting facade over the AIS Hub client.

use aishub_api::types::{BoundingBox, Vessel};
use aishub_api::{AreaQuery, Client, VesselQuery};
use chrono::Utc;
use serde::Serialize;

use crate::anomaly::{AlertReason, AnomalyFilter};
use crate::cache::{CacheStats, TtlCache};
use crate::config::TrackerConfig;
use crate::error::{ServiceError, TrackerError};
use crate::rate_limiter::{RateLimiter, TrackerSummary};
use crate::validation::validate_bounds;

/// Cached result of either query shape. Keys never collide between the two.
#[derive(Clone)]
enum CachedPayload {
    Area(Vec<Vessel>),
    Vessel(Vessel),
}

/// A flagged vessel together with the heuristics it matched.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VesselAlert {
    pub vessel: Vessel,
    pub reasons: Vec<AlertReason>,
}

/// Vessel tracking service: area queries, single-vessel lookups, and alerts.
///
/// Cache hits bypass the network entirely. On cache misses every request,
/// whichever method issued it, goes through one shared rate limiter.
/// Concurrent misses for the same key are not deduplicated.
pub struct VesselTracker {
    inner: Client,
    cache: TtlCache<CachedPayload>,
    limiter: RateLimiter,
    anomaly: AnomalyFilter,
}

impl VesselTracker {
    /// Builds a tracker from explicit configuration.
    ///
    /// A missing API key is not an error; the provider will answer with
    /// restricted data or an error payload.
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        let api_key = match config.api_key.as_deref() {
            Some(key) => key,
            None => {
                tracing::warn!("No AIS Hub API key provided. Service will be limited.");
                ""
            }
        };
        Ok(Self {
            inner: Client::with_base_url(&config.base_url, api_key)?,
            cache: TtlCache::new(config.cache_ttl),
            limiter: RateLimiter::new(config.rate_limit_interval),
            anomaly: AnomalyFilter::new(config.stale_after),
        })
    }

    /// Fetches vessels inside `bounds`, returning a cached list when
    /// `use_cache` is set and a fresh entry exists.
    ///
    /// The result is stored even when `use_cache` is false. Every failure,
    /// including an invalid box, is returned as a [`ServiceError`].
    pub async fn get_vessels_in_bounds(
        &self,
        bounds: &BoundingBox,
        use_cache: bool,
    ) -> Result<Vec<Vessel>, ServiceError> {
        self.fetch_area(bounds, use_cache).await.map_err(|e| {
            tracing::error!("Error fetching vessels: {}", e);
            ServiceError::from(e)
        })
    }

    async fn fetch_area(
        &self,
        bounds: &BoundingBox,
        use_cache: bool,
    ) -> Result<Vec<Vessel>, TrackerError> {
        let bounds = validate_bounds(bounds)?;
        let cache_key = area_cache_key(&bounds);

        if use_cache {
            if let Some(CachedPayload::Area(vessels)) = self.cache.get(&cache_key) {
                tracing::debug!("Returning {} cached vessels for {}", vessels.len(), cache_key);
                return Ok(vessels);
            }
        }

        self.limiter.acquire().await;
        let result = self.inner.get_vessels_in_area(&AreaQuery::new(bounds)).await;
        self.limiter.tracker().record(&result);
        let vessels = result?;

        let outside = vessels
            .iter()
            .filter(|v| !bounds.contains(v.latitude, v.longitude))
            .count();
        if outside > 0 {
            tracing::debug!("{} returned vessels lie outside {}", outside, cache_key);
        }

        self.cache
            .set(cache_key, CachedPayload::Area(vessels.clone()));
        tracing::info!("Fetched {} vessels", vessels.len());
        Ok(vessels)
    }

    /// Looks up one vessel by MMSI.
    ///
    /// Returns `None` both when the vessel is unknown and when the request
    /// fails for any reason; failures are only logged. Empty answers are
    /// not cached.
    pub async fn get_vessel_details(&self, mmsi: u64) -> Option<Vessel> {
        let cache_key = detail_cache_key(mmsi);
        if let Some(CachedPayload::Vessel(vessel)) = self.cache.get(&cache_key) {
            tracing::debug!("Returning cached details for {}", cache_key);
            return Some(vessel);
        }

        self.limiter.acquire().await;
        let result = self.inner.get_vessel(&VesselQuery::new(mmsi)).await;
        self.limiter.tracker().record(&result);

        match result {
            Ok(Some(vessel)) => {
                self.cache
                    .set(cache_key, CachedPayload::Vessel(vessel.clone()));
                Some(vessel)
            }
            Ok(None) => {
                tracing::debug!("No vessel found for MMSI {}", mmsi);
                None
            }
            Err(e) => {
                tracing::warn!("Error fetching vessel details for MMSI {}: {}", mmsi, e);
                None
            }
        }
    }

    /// Cache-enabled area query narrowed to suspicious vessels.
    pub async fn get_vessels_with_alerts(
        &self,
        bounds: &BoundingBox,
    ) -> Result<Vec<Vessel>, ServiceError> {
        let vessels = self.get_vessels_in_bounds(bounds, true).await?;
        let flagged = self.anomaly.filter(&vessels, Utc::now());
        tracing::info!("{} vessels flagged", flagged.len());
        Ok(flagged)
    }

    /// Like [`Self::get_vessels_with_alerts`], keeping the matched reasons.
    pub async fn get_vessel_alerts(
        &self,
        bounds: &BoundingBox,
    ) -> Result<Vec<VesselAlert>, ServiceError> {
        let vessels = self.get_vessels_in_bounds(bounds, true).await?;
        let now = Utc::now();
        let alerts: Vec<VesselAlert> = vessels
            .into_iter()
            .filter_map(|vessel| {
                let reasons = self.anomaly.reasons(&vessel, now);
                (!reasons.is_empty()).then_some(VesselAlert { vessel, reasons })
            })
            .collect();
        tracing::info!("{} vessels flagged", alerts.len());
        Ok(alerts)
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("Cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Outcome counters for remote calls made so far.
    pub fn request_summary(&self) -> TrackerSummary {
        self.limiter.tracker().summary()
    }
}

/// Cache key for an area query: the exact coordinate signature.
pub fn area_cache_key(bounds: &BoundingBox) -> String {
    format!(
        "vessels_{}_{}_{}_{}",
        bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
    )
}

pub fn detail_cache_key(mmsi: u64) -> String {
    format!("vessel_detail_{}", mmsi)
}
