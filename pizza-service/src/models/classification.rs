use crate::error::AnalyzeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/analyze`.
///
/// `imageUrl` is kept as a raw JSON value so that "missing" can be told apart
/// from "present but the wrong type".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassificationRequest {
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<Value>,
}

impl ClassificationRequest {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: Some(Value::String(image_url.into())),
        }
    }

    /// Parse a request body.
    ///
    /// Only a JSON object can carry `imageUrl`. Arrays, strings, numbers and
    /// booleans have no such field and count as missing it; `null` has no
    /// fields at all and is malformed.
    pub fn from_body(body: &[u8]) -> Result<Self, AnalyzeError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(mut fields) => Ok(Self {
                image_url: fields.remove("imageUrl"),
            }),
            Value::Null => Err(AnalyzeError::MalformedRequest(
                "request body is null".to_string(),
            )),
            _ => Ok(Self::default()),
        }
    }

    /// The image reference to classify.
    ///
    /// Absent, `null`, `false`, `0` and `""` count as missing. Any other
    /// non-string value is a malformed request.
    pub fn image_url(&self) -> Result<&str, AnalyzeError> {
        match &self.image_url {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Err(AnalyzeError::Validation),
            Some(Value::String(url)) if url.is_empty() => Err(AnalyzeError::Validation),
            Some(Value::String(url)) => Ok(url.as_str()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(AnalyzeError::Validation),
            Some(other) => Err(AnalyzeError::MalformedRequest(format!(
                "imageUrl must be a string, got {}",
                json_type_name(other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Verdict label. The model is only asked for yes/no, so this never varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_pizza: bool,
    pub confidence: Confidence,
}

impl ClassificationResult {
    pub fn new(is_pizza: bool) -> Self {
        Self {
            is_pizza,
            confidence: Confidence::High,
        }
    }
}

/// `{ "error": "..." }` payload returned on every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
