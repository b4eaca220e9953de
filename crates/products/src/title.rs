//! Canonical display titles.

use crate::text::{normalize, title_case};

/// Clean a raw product title: collapse whitespace, then apply Title Case.
///
/// ```
/// use prodclean_products::clean_title;
///
/// assert_eq!(clean_title("  SUMMER   drESS  2024 "), "Summer Dress 2024");
/// ```
pub fn clean_title(raw_title: &str) -> String {
    title_case(&normalize(raw_title))
}
