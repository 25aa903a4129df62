//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the harvester:
//! - Building the HTTP client with a proper user agent string
//! - GET requests for result pages
//!
//! There is no retry logic: every transport failure, including a non-2xx
//! status, is fatal to the run.

use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for all page fetches
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("pubharvest/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one results page and returns its body
///
/// Non-2xx statuses are mapped to [`HarvestError::Http`] like any other
/// transport failure; the caller treats them all as fatal.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The fully paginated search URL
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, HarvestError> {
    let http_err = |source: reqwest::Error| HarvestError::Http {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(http_err)?;
    let response = response.error_for_status().map_err(http_err)?;
    response.text().await.map_err(http_err)
}
