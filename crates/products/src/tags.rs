//! Keyword tags derived from cleaned titles.

use std::collections::HashSet;

/// Words never emitted as tags.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "a", "an", "is",
    "it", "this", "that",
];

/// Whether `word` (already lower-cased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Extract lower-case keyword tags from a cleaned title.
///
/// Tokens are split on whitespace, stripped of punctuation at their edges,
/// and dropped if empty or a stopword. Duplicates are removed keeping the
/// first occurrence. No stemming, no length filter.
pub fn extract_tags(clean_title: &str) -> Vec<String> {
    let lowered = clean_title.to_lowercase();
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for token in lowered.split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() || is_stopword(token) {
            continue;
        }
        if seen.insert(token) {
            tags.push(token.to_string());
        }
    }

    tags
}
