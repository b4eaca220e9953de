use axum::Router;

pub mod clean;
pub mod system;

/// Router for the cleaning endpoints.
pub fn router() -> Router {
    Router::new().nest("/clean", clean::router())
}
