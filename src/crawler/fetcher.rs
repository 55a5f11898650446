//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester. Requests are
//! plain GETs with the client library's default headers, redirect policy
//! and timeouts. There is no retry: any transport error or non-success
//! status is returned as [`HarvestError::Fetch`] and ends the crawl.

use crate::HarvestError;
use reqwest::Client;
use url::Url;

/// Builds the HTTP client used for every page of a harvest
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// Fetches a page and returns its body text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(HarvestError::Fetch)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, HarvestError> {
    tracing::debug!("Fetching {}", url);

    let fetch_error = |source: reqwest::Error| HarvestError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(fetch_error)?
        .error_for_status()
        .map_err(fetch_error)?;

    response.text().await.map_err(fetch_error)
}
