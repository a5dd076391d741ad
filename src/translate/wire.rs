//! Payload parsing for the translate endpoint.
//!
//! The endpoint answers with a positional JSON array rather than an object:
//! index 0 holds the translated segments (each itself an array whose first
//! element is the segment text), and index 2 holds the detected source
//! language code:
//!
//! ```json
//! [[["Hello", "Hallo", null, null]], null, "de"]
//! ```
//!
//! These parsers are pure and total over arbitrary JSON — unexpected shapes
//! become [`TranslateError::Malformed`], never panics.

use serde_json::Value;

use super::TranslateError;

/// Extract the translated text: every segment's first element, joined with
/// single spaces.
pub fn parse_translation(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Malformed("missing segment list".into()))?;

    let mut parts = Vec::with_capacity(segments.len());
    for segment in segments {
        let text = segment
            .get(0)
            .and_then(Value::as_str)
            .ok_or_else(|| TranslateError::Malformed("segment without text".into()))?;
        parts.push(text);
    }

    let joined = parts.join(" ");
    if joined.is_empty() {
        return Err(TranslateError::Malformed("empty translation".into()));
    }
    Ok(joined)
}

/// Extract the detected source language code.
pub fn parse_detected_language(body: &Value) -> Result<String, TranslateError> {
    body.get(2)
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::Malformed("missing detected language".into()))
}
