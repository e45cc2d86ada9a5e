use thiserror::Error;

/// Errors surfaced by the completion client.
///
/// Transport failures map onto a fixed taxonomy: timeouts and connection
/// failures carry fixed messages, HTTP errors carry the status and the
/// response body, and anything else the transport reports lands in
/// [`LlmError::Request`]. Nothing is retried; every error propagates to
/// the caller immediately.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Required configuration is missing or empty.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The conversation failed local validation; no request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request exceeded the client timeout.
    #[error("timed out waiting for a response from the Groq API")]
    Timeout,

    /// The Groq API answered with a non-success status.
    #[error("Groq API returned status {status}: {detail}")]
    Http { status: u16, detail: String },

    /// The connection to the Groq API could not be established.
    #[error("failed to connect to the Groq API")]
    Connection,

    /// Any other transport failure.
    #[error("request to the Groq API failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::Connection
        } else {
            LlmError::Request { source: err }
        }
    }
}
