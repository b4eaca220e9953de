//! Whitespace and case normalization.

/// Collapse every run of whitespace (spaces, tabs, newlines) to one space and
/// trim both ends.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Title Case: first character of each token upper-cased, the rest lower-cased.
///
/// Tokens are joined back with single spaces. Only the first character is
/// touched, so alphanumeric tokens such as `500ml` stay `500ml`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        capitalize_into(&mut out, token);
    }
    out
}

fn capitalize_into(out: &mut String, token: &str) {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return;
    };

    // Characters whose upper-case form expands to several characters (e.g. 'ß')
    // are kept as-is so that re-cleaning a title never changes it.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(first),
    }

    for c in chars {
        out.extend(c.to_lowercase());
    }
}
