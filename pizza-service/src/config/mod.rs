use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default OpenAI-compatible API root.
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default vision-capable chat model.
const DEFAULT_VISION_MODEL: &str = "gpt-4-turbo";

/// Environment variable consulted for the API key at request time.
const DEFAULT_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct PizzaConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub observability: ObservabilityConfig,
}

/// Upstream provider settings.
///
/// The API key itself is deliberately absent: only the name of the variable
/// that holds it is known here, and it is read when a request needs it.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_var: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// OTLP collector endpoint; JSON logs only when unset.
    pub otlp_endpoint: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_VISION_MODEL.to_string(),
            api_key_var: DEFAULT_API_KEY_VAR.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PizzaConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(PizzaConfig {
            common: common_config,
            openai: OpenAiConfig {
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), is_prod)?,
                model: get_env("PIZZA_VISION_MODEL", Some(DEFAULT_VISION_MODEL), is_prod)?,
                api_key_var: env::var("OPENAI_API_KEY_VAR")
                    .unwrap_or_else(|_| DEFAULT_API_KEY_VAR.to_string()),
                timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            },
            observability: ObservabilityConfig {
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
