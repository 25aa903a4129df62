//! Crawler module for fetching and extracting PubMed result pages
//!
//! This module contains the core harvest logic, including:
//! - Search URL construction
//! - HTTP fetching
//! - Results-page extraction
//! - Page-by-page crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod query;

pub use coordinator::{run_harvest, Harvester};
pub use extractor::{extract_articles, read_total_pages, ArticleRecord};
pub use fetcher::{build_http_client, fetch_page};
pub use query::{build_search_url, page_url, PUBMED_BASE_URL};
