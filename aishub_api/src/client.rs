//! HTTP client for the AIS Hub API.

use std::time::Duration;

use url::Url;

use crate::{
    query::{add_common_to_url, AreaQuery, Query, VesselQuery},
    types::{AisHubResponse, Vessel},
    Error,
};

/// Production endpoint for the AIS Hub v2 API.
pub const DEFAULT_BASE_URL: &str = "https://www.aishub.net/api/v2";

/// Request timeout for AIS Hub calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the AIS Hub API.
///
/// Does not pace or cache requests; callers sharing a provider quota
/// are expected to do that themselves.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production AIS Hub API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("vessel-tracker/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, query.path()).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed(format!("invalid URL: {}", e))
            })?;
        Ok(query.add_to_url(&add_common_to_url(&url, &self.api_key)))
    }

    async fn get(&self, query: &impl Query) -> Result<AisHubResponse, Error> {
        let url = self.get_url(query)?;
        // reqwest errors embed the URL, which carries the API key.
        let resp = self.http.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to get {}: {}", query.path(), e);
            Error::RequestFailed(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<AisHubResponse>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })?;

        if let Some(message) = parsed.error_message() {
            tracing::warn!("AIS Hub reported an error: {}", message);
            return Err(Error::Provider(message));
        }

        Ok(parsed)
    }

    /// Fetches every vessel inside the query's bounding box, in provider order.
    ///
    /// A response without a `result` collection is an empty area, not an error.
    pub async fn get_vessels_in_area(&self, query: &AreaQuery) -> Result<Vec<Vessel>, Error> {
        let resp = self.get(query).await?;
        let vessels: Vec<Vessel> = resp
            .records(true)?
            .into_iter()
            .map(Vessel::from)
            .collect();
        tracing::debug!("Parsed {} vessel records", vessels.len());
        Ok(vessels)
    }

    /// Fetches the latest position of a single vessel.
    ///
    /// Returns `Ok(None)` when the provider answers with an empty collection.
    /// A missing collection is a parse error.
    pub async fn get_vessel(&self, query: &VesselQuery) -> Result<Option<Vessel>, Error> {
        let resp = self.get(query).await?;
        Ok(resp.records(false)?.into_iter().next().map(Vessel::from))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
