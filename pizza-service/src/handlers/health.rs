use crate::services::metrics::get_metrics;
use axum::{http::header, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "pizza-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness does not depend on the API key; it is only needed per request.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        get_metrics(),
    )
}
