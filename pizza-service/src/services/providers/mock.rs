//! Mock provider implementation for testing.

use super::{ProviderError, VisionProvider, VisionRequest, VisionResponse};
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Succeed with the given first-choice text (`None` = no choices).
    Reply(Option<String>),
    /// Fail as if the API key were missing.
    NotConfigured,
    /// Fail as if the network call errored.
    NetworkFailure,
    /// Fail with an upstream API error.
    ApiFailure(u16),
}

/// Mock vision provider that records every request it receives.
pub struct MockVisionProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<VisionRequest>>,
}

impl MockVisionProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that always answers with `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(MockBehavior::Reply(Some(text.to_string())))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    pub fn last_request(&self) -> Option<VisionRequest> {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.last().cloned())
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    async fn complete(&self, request: &VisionRequest) -> Result<VisionResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        match &self.behavior {
            MockBehavior::Reply(text) => Ok(VisionResponse {
                text: text.clone(),
                input_tokens: request.prompt.len() as u32 / 4,
                output_tokens: 1,
            }),
            MockBehavior::NotConfigured => Err(ProviderError::NotConfigured(
                "Mock vision provider has no API key".to_string(),
            )),
            MockBehavior::NetworkFailure => Err(ProviderError::NetworkError(
                "connection refused".to_string(),
            )),
            MockBehavior::ApiFailure(status) => Err(ProviderError::ApiError(format!(
                "Mock API error {}",
                status
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
