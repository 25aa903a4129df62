use crate::config::types::{CrawlConfig, OutputConfig, PageRange, SearchConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// All checks run before any network call is made, so a rejected
/// configuration never costs a request.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_search(&config.search)?;
    validate_pages(&config.pages)?;
    validate_output(&config.output)?;
    validate_base_url(&config.base_url)?;
    Ok(())
}

/// Validates the search term and language filters
fn validate_search(search: &SearchConfig) -> Result<(), ConfigError> {
    if search.term.trim().is_empty() {
        return Err(ConfigError::Validation(
            "search term must have a value".to_string(),
        ));
    }

    if search.languages.is_empty() {
        return Err(ConfigError::Validation(
            "at least one language must be specified".to_string(),
        ));
    }

    for language in &search.languages {
        if language.trim().is_empty() {
            return Err(ConfigError::Validation(
                "language codes cannot be empty".to_string(),
            ));
        }

        if language.chars().any(|c| c.is_whitespace()) {
            return Err(ConfigError::Validation(format!(
                "language code '{}' must not contain whitespace",
                language
            )));
        }
    }

    Ok(())
}

/// Validates the page range
fn validate_pages(pages: &PageRange) -> Result<(), ConfigError> {
    if pages.start < 1 {
        return Err(ConfigError::Validation(format!(
            "start page must be >= 1, got {}",
            pages.start
        )));
    }

    if pages.end < pages.start {
        return Err(ConfigError::Validation(format!(
            "end page must be >= start page, got {}..{}",
            pages.start, pages.end
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output(output: &OutputConfig) -> Result<(), ConfigError> {
    if output.csv_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "csv path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the base search URL
///
/// Article URLs are formed by appending an article id directly to the base,
/// so the base must end with a slash.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", base_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use HTTP or HTTPS, got '{}'",
            url.scheme()
        )));
    }

    if !base_url.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-url must end with '/', got '{}'",
            base_url
        )));
    }

    Ok(())
}
