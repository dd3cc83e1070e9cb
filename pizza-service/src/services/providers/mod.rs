//! Vision model provider abstractions and implementations.
//!
//! The classifier only depends on [`VisionProvider`], so the OpenAI backend
//! can be swapped for the mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A single-image, single-prompt chat request.
#[derive(Debug, Clone, PartialEq)]
pub struct VisionRequest {
    /// Instruction text sent alongside the image.
    pub prompt: String,

    /// Image reference, passed to the model by URL.
    pub image_url: String,

    /// Maximum output tokens.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,
}

/// Result of a provider call.
#[derive(Debug, Clone, Default)]
pub struct VisionResponse {
    /// Text of the first completion, if the model returned one.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: u32,

    /// Output tokens generated.
    pub output_tokens: u32,
}

/// Trait for vision-capable chat providers.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Run one completion for the given image and prompt.
    async fn complete(&self, request: &VisionRequest) -> Result<VisionResponse, ProviderError>;

    /// Short name used in logs and metrics.
    fn name(&self) -> &'static str;
}
