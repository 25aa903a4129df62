//! Harvest coordinator - main crawl loop
//!
//! This module drives the page-by-page traversal:
//! - Builds the search URL once
//! - Fetches and extracts each page in the configured range
//! - Validates the range against the site-reported total page count
//! - Accumulates records across pages
//!
//! The traversal is an explicit bounded loop threading a single record
//! accumulator; each iteration performs exactly one blocking fetch.

use crate::config::{validate, CrawlConfig};
use crate::crawler::extractor::{extract_articles, read_total_pages, ArticleRecord};
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::query::{build_search_url, page_url};
use crate::HarvestError;
use reqwest::Client;

/// Drives a harvest run over a configured page range
#[derive(Debug)]
pub struct Harvester {
    config: CrawlConfig,
    client: Client,
    search_url: String,
}

impl Harvester {
    /// Creates a new harvester
    ///
    /// Validates the configuration and builds the HTTP client and the
    /// search URL. No network traffic happens here.
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(HarvestError)` - Invalid configuration or client build failure
    pub fn new(config: CrawlConfig) -> Result<Self, HarvestError> {
        validate(&config)?;

        let client = build_http_client()?;
        let search_url = build_search_url(
            &config.base_url,
            &config.search.term,
            &config.search.languages,
        );

        Ok(Self {
            config,
            client,
            search_url,
        })
    }

    /// The search URL this harvester will paginate, ending in `&page=`
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Runs the harvest and returns all records in page order, then
    /// in-page document order
    ///
    /// The page range is checked against the site-reported total page
    /// count on the first fetched page, before any record is kept; a range
    /// beyond the total fails the whole run even when the first page
    /// itself had valid content. Any transport or extraction failure is
    /// fatal and discards the partial accumulator, so callers never see a
    /// truncated result presented as a complete one.
    pub async fn run(&self) -> Result<Vec<ArticleRecord>, HarvestError> {
        let start = self.config.pages.start;
        let end = self.config.pages.end;

        let mut records = Vec::new();

        for page in start..=end {
            let url = page_url(&self.search_url, page);
            tracing::debug!("Fetching {}", url);

            let body = fetch_page(&self.client, &url).await?;

            // The site reports the same total on every page, so the range
            // check runs once, on the first page, before any article is
            // extracted.
            if page == start {
                let total_pages = read_total_pages(&body)
                    .map_err(|source| HarvestError::Extract { page, source })?;
                if start > total_pages || end > total_pages {
                    return Err(HarvestError::PageRangeExceeded { total_pages });
                }
            }

            let articles = extract_articles(&body, &self.config.base_url)
                .map_err(|source| HarvestError::Extract { page, source })?;

            tracing::debug!("Extracted {} articles from page {}", articles.len(), page);
            records.extend(articles);

            tracing::info!("page {}/{}: done", page, end);
        }

        Ok(records)
    }
}

/// Runs a complete harvest for the given configuration
///
/// # Arguments
///
/// * `config` - The harvest configuration
///
/// # Returns
///
/// * `Ok(Vec<ArticleRecord>)` - All records from the configured page range
/// * `Err(HarvestError)` - Configuration, transport, bounds, or extraction
///   failure
///
/// # Example
///
/// ```no_run
/// use pubharvest::config::load_config;
/// use pubharvest::crawler::run_harvest;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("harvest.toml"))?;
/// let records = run_harvest(config).await?;
/// println!("{} articles", records.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_harvest(config: CrawlConfig) -> Result<Vec<ArticleRecord>, HarvestError> {
    let harvester = Harvester::new(config)?;
    harvester.run().await
}
