//! Shared query infrastructure: the [`Query`] trait and the parameters every request carries.

use url::Url;

/// Response format requested from the provider. Only JSON is parsed.
pub(crate) const OUTPUT_FORMAT: &str = "json";

/// Trait implemented by all query builders.
pub trait Query {
    /// Endpoint path relative to the API base URL, e.g. `/vessels`.
    fn path(&self) -> &'static str;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Appends the authentication and output-format parameters sent with every request.
pub(crate) fn add_common_to_url(url: &Url, api_key: &str) -> Url {
    let mut url = url.clone();
    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("output", OUTPUT_FORMAT);
    url
}
