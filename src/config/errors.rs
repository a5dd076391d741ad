//! Error type carried by widget spec diagnostics.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// A single finding against a [`WidgetSpec`](super::spec::WidgetSpec).
///
/// Carries the stable code, the JSON path of the offending field, a
/// human-readable message, and an optional remediation hint.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{path}: {message}")]
pub struct WidgetSpecError {
    pub code: ErrorCode,
    /// JSON path of the offending field (e.g. `"summary.target_sentences"`).
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl WidgetSpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_message() {
        let err = WidgetSpecError::new(
            ErrorCode::ZeroTargetSentences,
            "summary.target_sentences",
            "must be at least 1",
        );
        assert_eq!(err.to_string(), "summary.target_sentences: must be at least 1");
    }

    #[test]
    fn test_serialize_skips_missing_hint() {
        let err = WidgetSpecError::new(ErrorCode::UnknownField, "bogus", "unrecognized field");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "unknown_field");
        assert!(json.get("hint").is_none());

        let hinted = err.with_hint("remove it");
        let json = serde_json::to_value(&hinted).unwrap();
        assert_eq!(json["hint"], "remove it");
    }
}
