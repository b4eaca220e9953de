use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use prodclean_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::warn!(error = %err, "rejected request");
    match err {
        DomainError::Validation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
        }
        DomainError::LimitExceeded(msg) => {
            json_error(StatusCode::PAYLOAD_TOO_LARGE, "limit_exceeded", msg)
        }
    }
}

/// Malformed bodies keep the extractor's status (400 syntax, 415 content
/// type, 422 shape) but get the JSON error body.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::warn!(error = %rejection.body_text(), "rejected request body");
    json_error(rejection.status(), "invalid_request", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
