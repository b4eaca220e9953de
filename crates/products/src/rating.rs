//! Rating extraction and rescaling onto a 0–5 scale.

use crate::numeric::{Grouping, NumberScanner, NumericRun};

/// Upper bound of the rating scale.
pub const SCALE: f64 = 5.0;

/// Extract a rating in `[0, 5]` from a free-form rating string.
///
/// Notations, in priority order:
/// 1. `"<a> out of <b>"` (case-insensitive) → `a / b * 5`
/// 2. `"<a>/<b>"` → `a / b * 5`
/// 3. a bare number `"<a>"` → `a`
///
/// Results outside `[0, 5]` are clamped. A zero divisor or input without
/// digits yields `None`.
///
/// ```
/// use prodclean_products::parse_rating;
///
/// assert_eq!(parse_rating("4.2 out of 5"), Some(4.2));
/// assert_eq!(parse_rating("8/10"), Some(4.0));
/// ```
pub fn parse_rating(raw_rating: &str) -> Option<f64> {
    let runs: Vec<NumericRun> = NumberScanner::new(raw_rating, Grouping::None).collect();
    let first = runs.first()?;

    let pair = find_pair(raw_rating, &runs, "outof").or_else(|| find_pair(raw_rating, &runs, "/"));
    let rating = match pair {
        Some((numerator, denominator)) => rescale(numerator, denominator)?,
        None => signed_value(raw_rating, first),
    };

    clamp(rating)
}

/// First pair of adjacent numbers separated by `separator` (whitespace and
/// case ignored).
fn find_pair(input: &str, runs: &[NumericRun], separator: &str) -> Option<(f64, f64)> {
    runs.windows(2).find_map(|pair| {
        let between: String = input[pair[0].end..pair[1].start]
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        (between == separator).then(|| (signed_value(input, &pair[0]), pair[1].value))
    })
}

/// A `-` directly in front of the run negates it, unless it sits between two
/// numbers (`"4-5"`).
fn signed_value(input: &str, run: &NumericRun) -> f64 {
    let mut before = input[..run.start].chars().rev();
    match (before.next(), before.next()) {
        (Some('-'), prev) if !prev.is_some_and(|c| c.is_ascii_digit()) => -run.value,
        _ => run.value,
    }
}

fn rescale(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    if denominator == SCALE {
        return Some(numerator);
    }
    Some(numerator * SCALE / denominator)
}

fn clamp(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(0.0, SCALE))
}
