//! Error type for the classifier endpoint.
//!
//! Only validation and method errors reach the caller with a specific message.
//! Everything else is logged and collapsed into a single generic 500.

use crate::models::ErrorBody;
use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub const IMAGE_URL_REQUIRED: &str = "Image URL is required";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const ANALYSIS_FAILED: &str = "Failed to analyze image";

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{}", IMAGE_URL_REQUIRED)]
    Validation,

    #[error("{}", METHOD_NOT_ALLOWED)]
    MethodNotAllowed,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Provider not configured: {0}")]
    Configuration(String),

    #[error("Upstream error: {0}")]
    Upstream(#[source] ProviderError),
}

impl AnalyzeError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalyzeError::Validation => StatusCode::BAD_REQUEST,
            AnalyzeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AnalyzeError::MalformedRequest(_)
            | AnalyzeError::Configuration(_)
            | AnalyzeError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AnalyzeError::Validation => "validation",
            AnalyzeError::MethodNotAllowed => "method_not_allowed",
            AnalyzeError::MalformedRequest(_) => "malformed_request",
            AnalyzeError::Configuration(_) => "configuration",
            AnalyzeError::Upstream(_) => "upstream",
        }
    }
}

impl From<ProviderError> for AnalyzeError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => AnalyzeError::Configuration(msg),
            other => AnalyzeError::Upstream(other),
        }
    }
}

impl From<serde_json::Error> for AnalyzeError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzeError::MalformedRequest(err.to_string())
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AnalyzeError::Validation => IMAGE_URL_REQUIRED.to_string(),
            AnalyzeError::MethodNotAllowed => METHOD_NOT_ALLOWED.to_string(),
            ref err => {
                tracing::error!(kind = err.kind(), error = %err, "Error analyzing image");
                ANALYSIS_FAILED.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AnalyzeError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_is_a_400_with_specific_message() {
        let (status, body) = body_of(AnalyzeError::Validation).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Image URL is required" }));
    }

    #[tokio::test]
    async fn method_not_allowed_is_a_405() {
        let (status, body) = body_of(AnalyzeError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn configuration_and_upstream_failures_are_indistinguishable() {
        let missing_key = AnalyzeError::from(ProviderError::NotConfigured(
            "OPENAI_API_KEY is not set".to_string(),
        ));
        let network = AnalyzeError::from(ProviderError::NetworkError("refused".to_string()));

        let (status_a, body_a) = body_of(missing_key).await;
        let (status_b, body_b) = body_of(network).await;

        assert_eq!(status_a, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_a, status_b);
        assert_eq!(body_a, body_b);
        assert_eq!(body_a, serde_json::json!({ "error": "Failed to analyze image" }));
    }

    #[test]
    fn not_configured_maps_to_configuration() {
        let err = AnalyzeError::from(ProviderError::NotConfigured("missing".to_string()));
        assert!(matches!(err, AnalyzeError::Configuration(_)));

        let err = AnalyzeError::from(ProviderError::RateLimited);
        assert!(matches!(err, AnalyzeError::Upstream(ProviderError::RateLimited)));
    }
}
