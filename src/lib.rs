//! # groq-chat
//!
//! Minimal chat completion client for the Groq API: load configuration,
//! send one request per dialogue turn, get typed errors back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use groq_chat::{CompletionClient, GenerationOptions, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CompletionClient::from_env()?;
//!     let reply = client
//!         .generate_response(
//!             &[Message::user("Explain the importance of fast language models.")],
//!             &GenerationOptions::default(),
//!         )
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod completions;
pub mod config;
pub mod error;

pub use completions::{
    CompletionClient, FALLBACK_RESPONSE, GenerationOptions, Message, REQUEST_TIMEOUT,
};
pub use config::{DEFAULT_MODEL, GroqConfig};
pub use error::LlmError;
