//! Configuration for the generation handler.

use derive_getters::Getters;
use sitegen_error::ConfigError;

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

/// Configuration for the generation handler.
///
/// The API key is injected at construction. Its absence is reported as a
/// 503 on each request rather than failing startup, so a misconfigured
/// deployment still answers health checks and preflights.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct HandlerConfig {
    /// API key for the upstream provider
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier
    #[builder(default = "default_model()")]
    model: String,
    /// Chat completions endpoint URL
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Sampling temperature
    #[builder(default = "0.7")]
    temperature: f32,
    /// Maximum tokens to generate
    #[builder(default = "4000")]
    max_tokens: u32,
    /// Outbound call timeout in seconds
    #[builder(default = "60")]
    timeout_secs: u64,
}

impl HandlerConfig {
    /// Returns a builder for constructing a HandlerConfig.
    pub fn builder() -> HandlerConfigBuilder {
        HandlerConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (optional; absence becomes a per-request 503)
    /// - `OPENAI_MODEL` (default: "gpt-4o-mini")
    /// - `OPENAI_BASE_URL` (default: the OpenAI chat completions endpoint)
    /// - `OPENAI_TEMPERATURE` (default: 0.7)
    /// - `OPENAI_MAX_TOKENS` (default: 4000)
    /// - `OPENAI_TIMEOUT_SECS` (default: 60)
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a numeric override does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = HandlerConfig::builder();
        builder.api_key(std::env::var("OPENAI_API_KEY").ok());

        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            builder.model(model);
        }
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            builder.base_url(base_url);
        }
        if let Ok(value) = std::env::var("OPENAI_TEMPERATURE") {
            let temperature: f32 = value.parse().map_err(|_| {
                ConfigError::new(format!("OPENAI_TEMPERATURE is not a number: {value}"))
            })?;
            builder.temperature(temperature);
        }
        if let Ok(value) = std::env::var("OPENAI_MAX_TOKENS") {
            let max_tokens: u32 = value.parse().map_err(|_| {
                ConfigError::new(format!("OPENAI_MAX_TOKENS is not a number: {value}"))
            })?;
            builder.max_tokens(max_tokens);
        }
        if let Ok(value) = std::env::var("OPENAI_TIMEOUT_SECS") {
            let timeout_secs: u64 = value.parse().map_err(|_| {
                ConfigError::new(format!("OPENAI_TIMEOUT_SECS is not a number: {value}"))
            })?;
            builder.timeout_secs(timeout_secs);
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HandlerConfig::builder().build().unwrap();
        assert!(config.api_key().is_none());
        assert_eq!(config.model(), "gpt-4o-mini");
        assert_eq!(
            config.base_url(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(*config.temperature(), 0.7);
        assert_eq!(*config.max_tokens(), 4000);
        assert_eq!(*config.timeout_secs(), 60);
    }

    #[test]
    fn test_builder_overrides() {
        let config = HandlerConfig::builder()
            .api_key(Some("sk-test".to_string()))
            .model("gpt-4o")
            .base_url("http://localhost:9999/v1/chat/completions")
            .build()
            .unwrap();
        assert_eq!(config.api_key().as_deref(), Some("sk-test"));
        assert_eq!(config.model(), "gpt-4o");
    }
}
