use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Product Cleaner API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /clean/title": "Clean a single product title",
            "POST /clean/product": "Clean and standardize a complete product",
            "POST /clean/bulk": "Clean multiple products at once",
        },
    }))
}

pub async fn not_found() -> axum::response::Response {
    errors::json_error(StatusCode::NOT_FOUND, "not_found", "not found")
}
