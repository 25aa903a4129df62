//! Results-page extraction
//!
//! This module parses one PubMed search-results page and pulls out:
//! - The site-reported total page count, from the pagination label
//! - One record per article summary: URL, language, title, abstract snippet
//!
//! An article summary missing any expected element aborts extraction for
//! the entire page, not just that article.

use crate::text::{collapse_whitespace, strip_punctuation};
use crate::ExtractError;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// One extracted article
///
/// Serializes with the CSV column names `Url,Language,Title,Abstract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// Absolute article URL (base URL + `data-article-id`)
    #[serde(rename = "Url")]
    pub url: String,

    /// Language tag, punctuation-stripped
    #[serde(rename = "Language")]
    pub language: String,

    /// Title, whitespace-collapsed then punctuation-stripped
    #[serde(rename = "Title")]
    pub title: String,

    /// Abstract snippet, whitespace-collapsed
    #[serde(rename = "Abstract")]
    pub abstract_text: String,
}

/// Reads the site-reported total page count from the pagination label
///
/// The label text is something like "of 1,234"; every non-digit character
/// is dropped before parsing.
///
/// # Returns
///
/// * `Ok(u32)` - The total page count
/// * `Err(ExtractError)` - Container or label missing, or the label text
///   carries no digits
pub fn read_total_pages(html: &str) -> Result<u32, ExtractError> {
    let document = Html::parse_document(html);
    let container = find_container(&document)?;

    let label_selector = selector("label.of-total-pages")?;
    let label = container
        .select(&label_selector)
        .next()
        .ok_or(ExtractError::MissingElement("total page count label"))?;

    let text: String = label.text().collect();
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    digits
        .parse()
        .map_err(|_| ExtractError::MalformedPageCount(collapse_whitespace(&text)))
}

/// Extracts every article record from one results page, in document order
///
/// # Arguments
///
/// * `html` - Raw page body
/// * `base_url` - Prefix for article URLs
///
/// # Returns
///
/// * `Ok(Vec<ArticleRecord>)` - All article records on the page
/// * `Err(ExtractError)` - The results container, or any expected element
///   on any article summary, was missing
pub fn extract_articles(html: &str, base_url: &str) -> Result<Vec<ArticleRecord>, ExtractError> {
    let document = Html::parse_document(html);
    let container = find_container(&document)?;

    let article_selector = selector("article.full-docsum")?;
    container
        .select(&article_selector)
        .map(|summary| extract_article(&summary, base_url))
        .collect()
}

/// Locates the results container holding the article summaries and the
/// pagination label
fn find_container<'a>(document: &'a Html) -> Result<ElementRef<'a>, ExtractError> {
    let container_selector = selector("div.search-results")?;
    document
        .select(&container_selector)
        .next()
        .ok_or(ExtractError::MissingElement("search results container"))
}

/// Extracts one record from an article summary block
fn extract_article(summary: &ElementRef, base_url: &str) -> Result<ArticleRecord, ExtractError> {
    let title_selector = selector("a.docsum-title")?;
    let language_selector = selector("span.language.spaced-citation-item.citation-part")?;
    let snippet_selector = selector("div.full-view-snippet")?;

    let title_link = summary
        .select(&title_selector)
        .next()
        .ok_or(ExtractError::MissingElement("article title link"))?;

    let article_id = title_link
        .value()
        .attr("data-article-id")
        .ok_or(ExtractError::MissingElement("data-article-id attribute"))?;
    let url = format!("{}{}", base_url, article_id);

    let language_tag = summary
        .select(&language_selector)
        .next()
        .ok_or(ExtractError::MissingElement("article language tag"))?;
    let language = strip_punctuation(&language_tag.text().collect::<String>());

    let title = strip_punctuation(&collapse_whitespace(
        &title_link.text().collect::<String>(),
    ));

    let snippet = summary
        .select(&snippet_selector)
        .next()
        .ok_or(ExtractError::MissingElement("abstract snippet"))?;
    // Snippets keep their punctuation; only whitespace is collapsed
    let abstract_text = collapse_whitespace(&snippet.text().collect::<String>());

    Ok(ArticleRecord {
        url,
        language,
        title,
        abstract_text,
    })
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(e.to_string()))
}
