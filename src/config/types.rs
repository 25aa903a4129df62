use serde::Deserialize;
use std::path::PathBuf;

use crate::crawler::PUBMED_BASE_URL;

/// Main configuration structure for a harvest run
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    pub search: SearchConfig,
    #[serde(default)]
    pub pages: PageRange,
    #[serde(default)]
    pub output: OutputConfig,

    /// Base search URL; overridable for mirrors and tests
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

/// What to search for
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Free-text search term
    pub term: String,

    /// Site-specific language filter codes (e.g. "chinese"), applied in order
    pub languages: Vec<String>,
}

/// Inclusive range of result pages to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRange {
    /// First results page to fetch (1-based)
    #[serde(rename = "start-page", default = "default_start_page")]
    pub start: u32,

    /// Last results page to fetch
    #[serde(rename = "end-page", default = "default_end_page")]
    pub end: u32,
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            start: default_start_page(),
            end: default_end_page(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV file to write
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_base_url() -> String {
    PUBMED_BASE_URL.to_string()
}

fn default_start_page() -> u32 {
    1
}

fn default_end_page() -> u32 {
    10
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data.csv")
}
