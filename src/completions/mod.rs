//! Chat completion call path: request shaping, the HTTP exchange, and
//! response extraction.

pub mod client;
pub mod request;
pub mod response;

pub use client::{CompletionClient, REQUEST_TIMEOUT};
pub use request::{GenerationOptions, Message};
pub use response::FALLBACK_RESPONSE;
