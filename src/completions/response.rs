use serde_json::Value;

/// Returned when a success response does not carry the expected
/// `choices[0].message.content` field.
pub const FALLBACK_RESPONSE: &str = "Unable to obtain a response from the Groq API.";

/// Pull the generated text out of a chat completion body.
///
/// Returns `None` when any step of the `choices[0].message.content` path
/// is absent or the content is not a string.
pub(crate) fn extract_content(body: &Value) -> Option<String> {
    body.get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|content| content.to_string())
}
