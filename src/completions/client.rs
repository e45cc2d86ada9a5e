//! Client for the Groq chat completions endpoint.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::completions::request::{ChatRequest, GenerationOptions, Message};
use crate::completions::response::{FALLBACK_RESPONSE, extract_content};
use crate::config::GroqConfig;
use crate::error::LlmError;

/// Applied to every request unless overridden with
/// [`CompletionClient::with_timeout`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues one chat completion request per call.
///
/// Holds immutable connection settings; every invocation is an
/// independent request/response exchange with no session state between
/// calls. Concurrent use from multiple tasks is fine, the underlying
/// `reqwest::Client` multiplexes independent requests.
#[derive(Debug)]
pub struct CompletionClient {
    config: GroqConfig,
    http: reqwest::Client,
}

impl CompletionClient {
    /// Create a client from explicit configuration.
    ///
    /// Fails with [`LlmError::Configuration`] when the endpoint URL or
    /// the credential is empty.
    pub fn new(config: GroqConfig) -> Result<Self, LlmError> {
        if config.api_url.is_empty() {
            return Err(LlmError::Configuration(
                "endpoint URL must not be empty".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(LlmError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        let http = build_http_client(REQUEST_TIMEOUT)?;
        Ok(Self { config, http })
    }

    /// Create a client from the process environment.
    ///
    /// See [`GroqConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(GroqConfig::from_env()?)
    }

    /// Rebuild the HTTP client with a different request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, LlmError> {
        self.http = build_http_client(timeout)?;
        Ok(self)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }

    /// Send a conversation and return the generated text.
    ///
    /// The conversation is validated locally before any network I/O:
    /// every message must carry both a role and content. The call then
    /// issues exactly one POST to the configured endpoint with the
    /// credential as a bearer token and `{model, messages, max_tokens,
    /// temperature}` as the JSON body.
    ///
    /// On a success status the text of the first choice is returned; a
    /// success body without `choices[0].message.content` yields
    /// [`FALLBACK_RESPONSE`] instead of an error.
    #[tracing::instrument(
        name = "generate_response",
        skip(self, conversation, options),
        fields(model = %self.config.model, messages = conversation.len()),
        err
    )]
    pub async fn generate_response(
        &self,
        conversation: &[Message],
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        validate_conversation(conversation)?;

        let payload = ChatRequest {
            model: &self.config.model,
            messages: conversation,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = %status, "Groq API returned error status");
            return Err(LlmError::Http {
                status: status.as_u16(),
                detail,
            });
        }

        debug!(status = %status, "chat completion request successful");

        let body: Value = response.json().await?;
        Ok(extract_content(&body).unwrap_or_else(|| FALLBACK_RESPONSE.to_string()))
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("groq-chat/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Reject malformed dialogue turns before any network I/O happens.
fn validate_conversation(conversation: &[Message]) -> Result<(), LlmError> {
    for message in conversation {
        if message.role.is_empty() || message.content.is_empty() {
            return Err(LlmError::InvalidInput(
                "each message must provide both a role and content".to_string(),
            ));
        }
    }
    Ok(())
}
