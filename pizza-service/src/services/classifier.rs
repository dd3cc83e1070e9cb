//! Pizza classification on top of a [`VisionProvider`].

use crate::error::AnalyzeError;
use crate::models::ClassificationResult;
use crate::services::metrics::{record_classification, record_upstream_failure};
use crate::services::providers::{VisionProvider, VisionRequest};
use std::sync::Arc;

/// Instruction sent with every image.
pub const PIZZA_PROMPT: &str = "This image is going to be analyzed by a 'Is it Pizza?' app. Your ONLY job is to determine if the image contains pizza. Respond with ONLY 'yes' if the image contains pizza, or 'no' if it does not contain pizza. No explanation, just 'yes' or 'no'.";

/// Enough for a one-word answer.
pub const MAX_ANSWER_TOKENS: u32 = 10;

/// Non-zero, so repeated calls on the same image may disagree.
pub const TEMPERATURE: f32 = 0.5;

#[derive(Clone)]
pub struct PizzaClassifier {
    provider: Arc<dyn VisionProvider>,
}

impl PizzaClassifier {
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self { provider }
    }

    /// Ask the model whether the image contains pizza.
    pub async fn classify(&self, image_url: &str) -> Result<ClassificationResult, AnalyzeError> {
        let request = build_request(image_url);

        let response = self.provider.complete(&request).await.map_err(|e| {
            record_upstream_failure(self.provider.name());
            AnalyzeError::from(e)
        })?;

        let is_pizza = interpret_answer(response.text.as_deref());

        tracing::info!(
            provider = self.provider.name(),
            is_pizza,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Classified image"
        );
        record_classification(is_pizza);

        Ok(ClassificationResult::new(is_pizza))
    }
}

pub fn build_request(image_url: &str) -> VisionRequest {
    VisionRequest {
        prompt: PIZZA_PROMPT.to_string(),
        image_url: image_url.to_string(),
        max_tokens: MAX_ANSWER_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// `true` iff the trimmed, lowercased answer contains "yes" anywhere.
///
/// Plain substring match: "no, not yes-worthy" counts as a yes.
pub fn interpret_answer(answer: Option<&str>) -> bool {
    answer
        .map(|text| text.trim().to_lowercase())
        .unwrap_or_default()
        .contains("yes")
}
