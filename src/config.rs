//! Connection settings for the Groq API.

use std::env;

use crate::error::LlmError;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

pub(crate) const API_KEY_ENV_VAR: &str = "API_KEY";
pub(crate) const API_URL_ENV_VAR: &str = "API_URL";
pub(crate) const MODEL_ENV_VAR: &str = "MODEL";

/// Endpoint, credential, and model identifier for one client instance.
///
/// Immutable once handed to [`CompletionClient::new`]; build it explicitly
/// at application startup or pull it from the environment with
/// [`GroqConfig::from_env`].
///
/// [`CompletionClient::new`]: crate::CompletionClient::new
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Chat completions endpoint URL.
    pub api_url: String,
    /// Bearer token authenticating every request.
    pub api_key: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl GroqConfig {
    /// Configuration for the given endpoint and credential, using
    /// [`DEFAULT_MODEL`].
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load the configuration from the process environment.
    ///
    /// Values from a `.env` file in the working directory are merged in
    /// first. `API_KEY` and `API_URL` are required; `MODEL` falls back to
    /// [`DEFAULT_MODEL`] when unset.
    pub fn from_env() -> Result<Self, LlmError> {
        dotenv::dotenv().ok();

        let api_key = require_env(API_KEY_ENV_VAR)?;
        let api_url = require_env(API_URL_ENV_VAR)?;
        let model = env::var(MODEL_ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_url,
            api_key,
            model,
        })
    }
}

fn require_env(name: &str) -> Result<String, LlmError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LlmError::Configuration(format!("{name} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults_the_model() {
        let config = GroqConfig::new("https://api.groq.com/openai/v1/chat/completions", "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn with_model_overrides_the_default() {
        let config = GroqConfig::new("https://api.groq.com/openai/v1/chat/completions", "sk-test")
            .with_model("llama-3.1-8b-instant");
        assert_eq!(config.model, "llama-3.1-8b-instant");
    }
}
