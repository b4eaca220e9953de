//! Price extraction.

use crate::numeric::{first_number, Grouping};

/// Extract the numeric value of a free-form price string.
///
/// Currency symbols and codes before, after or around the number (`₹`, `$`,
/// `INR`, `USD`, ...) are skipped and comma thousands separators are dropped.
/// When several numbers appear the first one wins. Returns `None` when no
/// digits are present; `Some(0.0)` is reserved for prices that really are zero.
///
/// ```
/// use prodclean_products::parse_price;
///
/// assert_eq!(parse_price("1,299 INR"), Some(1299.0));
/// assert_eq!(parse_price("call for price"), None);
/// ```
pub fn parse_price(raw_price: &str) -> Option<f64> {
    let run = first_number(raw_price, Grouping::Thousands)?;
    // The scanner never produces a sign, only overflow needs guarding.
    run.value.is_finite().then_some(run.value)
}
