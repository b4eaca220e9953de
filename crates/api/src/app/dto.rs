use serde::{Deserialize, Serialize};

use prodclean_core::{DomainError, DomainResult};
use prodclean_products::{CleanedProduct, RawProduct};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct TitleCleanRequest {
    pub raw_title: String,
}

/// One product as submitted. `title` is required; the rest may be missing.
#[derive(Debug, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkCleanRequest {
    pub products: Vec<ProductInput>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct TitleCleanResponse {
    pub clean_title: String,
}

#[derive(Debug, Serialize)]
pub struct BulkCleanResponse {
    pub products: Vec<CleanedProduct>,
}

// -------------------------
// Mapping
// -------------------------

impl ProductInput {
    pub fn into_raw(self) -> DomainResult<RawProduct> {
        if self.title.is_none() {
            return Err(DomainError::validation("title is required"));
        }
        Ok(RawProduct {
            title: self.title,
            price: self.price,
            rating: self.rating,
            category: self.category,
        })
    }
}

impl BulkCleanRequest {
    pub fn into_raw(self, max_products: usize) -> DomainResult<Vec<RawProduct>> {
        if self.products.len() > max_products {
            return Err(DomainError::limit_exceeded(format!(
                "at most {max_products} products per request, got {}",
                self.products.len()
            )));
        }

        self.products
            .into_iter()
            .enumerate()
            .map(|(idx, product)| {
                product.into_raw().map_err(|e| match e {
                    DomainError::Validation(msg) => {
                        DomainError::validation(format!("products[{idx}]: {msg}"))
                    }
                    other => other,
                })
            })
            .collect()
    }
}
