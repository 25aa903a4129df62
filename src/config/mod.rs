//! Configuration module for pubharvest
//!
//! A harvest is described either by CLI flags or by a TOML configuration
//! file; both paths produce a [`CrawlConfig`] and run the same validation.
//!
//! # Example
//!
//! ```no_run
//! use pubharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Pages: {}..{}", config.pages.start, config.pages.end);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CrawlConfig, OutputConfig, PageRange, SearchConfig};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
