//! Per-product cleaning pipeline.

use serde::{Deserialize, Serialize};

use crate::{extract_tags, parse_price, parse_rating, slugify, title::clean_title};

/// A product record as scraped or uploaded: every field optional, untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Canonical product fields.
///
/// `price_value` and `rating_value` are `None` when the raw field was missing
/// or had nothing parseable; they serialize as `null`, never as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedProduct {
    pub title_clean: String,
    pub price_value: Option<f64>,
    pub rating_value: Option<f64>,
    pub slug: String,
    pub tags: Vec<String>,
    /// Passed through from the raw record unchanged. Not part of the wire
    /// record, which carries exactly the five cleaned fields.
    #[serde(default, skip_serializing)]
    pub category: Option<String>,
}

/// Clean one product.
///
/// Each output field is derived independently; a field that cannot be parsed
/// comes back empty without affecting the others. Slug and tags are derived
/// from the cleaned title, never the raw one.
pub fn clean(raw: &RawProduct) -> CleanedProduct {
    let title_clean = raw.title.as_deref().map(clean_title).unwrap_or_default();

    let price_value = raw.price.as_deref().and_then(parse_price);
    if price_value.is_none() {
        log_unparsed("price", raw.price.as_deref());
    }

    let rating_value = raw.rating.as_deref().and_then(parse_rating);
    if rating_value.is_none() {
        log_unparsed("rating", raw.rating.as_deref());
    }

    let slug = slugify(&title_clean);
    let tags = extract_tags(&title_clean);

    CleanedProduct {
        title_clean,
        price_value,
        rating_value,
        slug,
        tags,
        category: raw.category.clone(),
    }
}

/// Clean a batch of products, one output per input, in input order.
pub fn clean_bulk(raws: &[RawProduct]) -> Vec<CleanedProduct> {
    raws.iter().map(clean).collect()
}

fn log_unparsed(field: &'static str, raw: Option<&str>) {
    if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
        tracing::debug!(field, raw, "field present but not parseable");
    }
}
