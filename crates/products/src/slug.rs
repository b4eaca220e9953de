//! URL slugs derived from cleaned titles.

/// Build a URL-safe slug from a cleaned title.
///
/// The title is lower-cased and every run of non-alphanumeric characters
/// (punctuation, symbols, whitespace, ASCII or not) becomes one hyphen.
/// Non-ASCII letters and digits, and combining accents, are dropped without
/// splitting the word, so the slug only ever holds `[a-z0-9-]`. No leading,
/// trailing or doubled hyphens. An empty title gives an empty slug.
pub fn slugify(clean_title: &str) -> String {
    let lowered = clean_title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_hyphen = false;
        } else if !ch.is_alphanumeric() && !is_combining_mark(ch) {
            pending_hyphen = true;
        }
    }

    slug
}

/// Combining diacritics, e.g. the dot left over when 'İ' is lower-cased.
fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}
