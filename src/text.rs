//! Text cleanup helpers for extracted page content
//!
//! PubMed result pages carry trailing punctuation on citation fragments and
//! heavy indentation inside title links and snippets. Extracted fields pass
//! through these normalizers before they are recorded.

/// Removes every ASCII punctuation character, preserving all other
/// characters and their order.
///
/// Total over any input, including the empty string, and idempotent.
///
/// # Examples
///
/// ```
/// use pubharvest::text::strip_punctuation;
///
/// assert_eq!(strip_punctuation("Chinese."), "Chinese");
/// assert_eq!(strip_punctuation("[His bundle pacing]"), "His bundle pacing");
/// ```
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Collapses every run of whitespace to a single space and trims the ends.
///
/// # Examples
///
/// ```
/// use pubharvest::text::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a\n   b\tc "), "a b c");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
