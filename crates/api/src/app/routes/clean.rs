use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::config::ApiConfig;

pub fn router() -> Router {
    Router::new()
        .route("/title", post(clean_title))
        .route("/product", post(clean_product))
        .route("/bulk", post(clean_bulk))
}

pub async fn clean_title(
    payload: Result<Json<dto::TitleCleanRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    tracing::info!(raw_len = body.raw_title.len(), "cleaning title");
    let clean_title = prodclean_products::clean_title(&body.raw_title);
    Json(dto::TitleCleanResponse { clean_title }).into_response()
}

pub async fn clean_product(
    payload: Result<Json<dto::ProductInput>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let raw = match body.into_raw() {
        Ok(raw) => raw,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(
        has_price = raw.price.is_some(),
        has_rating = raw.rating.is_some(),
        "cleaning product"
    );
    Json(prodclean_products::clean(&raw)).into_response()
}

pub async fn clean_bulk(
    Extension(config): Extension<Arc<ApiConfig>>,
    payload: Result<Json<dto::BulkCleanRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let raws = match body.into_raw(config.max_bulk_products) {
        Ok(raws) => raws,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(products = raws.len(), "cleaning bulk request");

    // CPU-bound; run it off the async workers.
    let products = match tokio::task::spawn_blocking(move || prodclean_products::clean_bulk(&raws)).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "bulk cleaning task failed");
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "bulk cleaning failed");
        }
    };

    Json(dto::BulkCleanResponse { products }).into_response()
}
