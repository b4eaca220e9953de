//! HTTP application wiring (Axum router).
//!
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and mapping to the cleaning types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ApiConfig) -> Router {
    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(ServiceBuilder::new().layer(Extension(Arc::new(config))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Shared in-memory sink for captured log lines.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn app() -> Router {
        build_app(ApiConfig::default())
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, _) = call(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let (status, body) = call(app(), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["endpoints"]["POST /clean/bulk"].is_string());
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (status, body) = call(app(), Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn clean_title_endpoint() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/title",
            Some(json!({"raw_title": "  SUMMER   drESS  2024 "})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"clean_title": "Summer Dress 2024"}));
    }

    #[tokio::test]
    async fn clean_product_endpoint() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/product",
            Some(json!({
                "title": " eco friendly bottle 500ml green",
                "price": "₹499",
                "rating": "4.2 out of 5",
                "category": "Kitchen",
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "title_clean": "Eco Friendly Bottle 500ml Green",
                "price_value": 499.0,
                "rating_value": 4.2,
                "slug": "eco-friendly-bottle-500ml-green",
                "tags": ["eco", "friendly", "bottle", "500ml", "green"],
            })
        );
    }

    #[tokio::test]
    async fn clean_product_reports_unparseable_price_as_null() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/product",
            Some(json!({"title": "steel mug", "price": "call for price"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["price_value"].is_null());
        assert!(body["rating_value"].is_null());
        assert_eq!(body["slug"], "steel-mug");
        assert_eq!(body["tags"], json!(["steel", "mug"]));
    }

    #[tokio::test]
    async fn single_record_endpoints_log_each_request() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (status, _) = call(
            app(),
            Method::POST,
            "/clean/title",
            Some(json!({"raw_title": "steel mug"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(
            app(),
            Method::POST,
            "/clean/product",
            Some(json!({"title": "steel mug", "price": "$5"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let captured = logs.contents();
        assert!(captured.contains("cleaning title"), "{captured}");
        assert!(captured.contains("cleaning product"), "{captured}");
        assert!(captured.contains("has_price=true"), "{captured}");
    }

    #[tokio::test]
    async fn clean_product_requires_title() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/product",
            Some(json!({"price": "$5"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn wrongly_typed_field_is_rejected_as_json() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/title",
            Some(json!({"raw_title": 42})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid_request");
    }

    #[tokio::test]
    async fn bulk_is_order_preserving() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/bulk",
            Some(json!({"products": [
                {"title": "widget a", "price": "$10", "rating": "5/5", "category": "Tools"},
                {"title": "widget b", "price": "$20", "rating": "4.5", "category": "Tools"},
            ]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["title_clean"], "Widget A");
        assert_eq!(products[0]["price_value"], 10.0);
        assert_eq!(products[0]["rating_value"], 5.0);
        assert_eq!(products[1]["title_clean"], "Widget B");
        assert_eq!(products[1]["price_value"], 20.0);
        assert_eq!(products[1]["rating_value"], 4.5);
    }

    #[tokio::test]
    async fn bulk_rejects_oversized_batches() {
        let app = build_app(ApiConfig {
            max_bulk_products: 1,
            ..ApiConfig::default()
        });
        let (status, body) = call(
            app,
            Method::POST,
            "/clean/bulk",
            Some(json!({"products": [{"title": "a"}, {"title": "b"}]})),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"], "limit_exceeded");
    }

    #[tokio::test]
    async fn bulk_names_the_invalid_entry() {
        let (status, body) = call(
            app(),
            Method::POST,
            "/clean/bulk",
            Some(json!({"products": [{"title": "a"}, {"price": "$1"}]})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().contains("products[1]"));
    }
}
