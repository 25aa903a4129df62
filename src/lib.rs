//! Pubharvest: a PubMed foreign-language article harvester
//!
//! This crate fetches PubMed search-result pages for a search term filtered
//! to a set of non-English languages, extracts per-article metadata, and
//! writes the collected records to a CSV file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod text;

use thiserror::Error;

/// Main error type for pubharvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("requested pages exceed the {total_pages} result pages reported by the site")]
    PageRangeExceeded { total_pages: u32 },

    #[error("extraction failed on page {page}: {source}")]
    Extract { page: u32, source: ExtractError },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while extracting records from a results page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("expected element missing: {0}")]
    MissingElement(&'static str),

    #[error("total page count label is not numeric: '{0}'")]
    MalformedPageCount(String),
}

/// Result type alias for pubharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{CrawlConfig, OutputConfig, PageRange, SearchConfig};
pub use crawler::{run_harvest, ArticleRecord, Harvester};
pub use output::write_csv;
