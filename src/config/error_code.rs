//! Stable error codes for widget spec diagnostics.

use serde::Serialize;

/// Machine-readable identifier for a validation finding.
///
/// Codes are stable across releases so callers can match on them; messages
/// and hints are free to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `summary.target_sentences` is zero.
    ZeroTargetSentences,
    /// `summary.min_chars` is zero, so every message gets a summarize offer.
    ZeroMinChars,
    /// A translation target is not a supported language code.
    UnknownLanguage,
    /// A field not recognized by the schema was present.
    UnknownField,
}

impl ErrorCode {
    /// Returns the snake_case identifier, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroTargetSentences => "zero_target_sentences",
            Self::ZeroMinChars => "zero_min_chars",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
        }
    }
}
