//! Search URL construction
//!
//! PubMed's search endpoint takes the term as a `+`-joined query value,
//! one `filter=lang.<code>` parameter per language, and a `page` parameter.
//! The URL is assembled by plain string formatting: percent-encoding the
//! term would mangle the literal `+` convention the site expects.

/// Base URL of the PubMed search endpoint and of article pages
pub const PUBMED_BASE_URL: &str = "https://pubmed.ncbi.nlm.nih.gov/";

/// Builds the paginated search URL for a term and a set of language filters
///
/// The term is trimmed and every internal whitespace run becomes a single
/// `+`. Language filters are appended in input order. The returned URL ends
/// with `&page=`, left open for [`page_url`] to complete.
///
/// Term and language emptiness are enforced by `config::validate` before
/// this runs, so the builder is total over validated input.
///
/// # Example
///
/// ```
/// use pubharvest::crawler::{build_search_url, PUBMED_BASE_URL};
///
/// let url = build_search_url(PUBMED_BASE_URL, "knee arthritis", &["chinese".to_string()]);
/// assert_eq!(
///     url,
///     "https://pubmed.ncbi.nlm.nih.gov/?term=knee+arthritis&filter=lang.chinese&page="
/// );
/// ```
pub fn build_search_url(base_url: &str, term: &str, languages: &[String]) -> String {
    let entry = term.trim().split_whitespace().collect::<Vec<_>>().join("+");

    let mut url = format!("{}?term={}", base_url, entry);
    for language in languages {
        url.push_str(&format!("&filter=lang.{}", language));
    }
    url.push_str("&page=");
    url
}

/// Completes a search URL with a concrete page number
pub fn page_url(search_url: &str, page: u32) -> String {
    format!("{}{}", search_url, page)
}
