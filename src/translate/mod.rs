//! Translation and language detection services.
//!
//! The widget calls a remote translate endpoint for language detection and
//! translation. The service seam is the [`TranslateProvider`] trait;
//! [`google::GoogleTranslateClient`] is the HTTP implementation. Failures
//! surface as [`TranslateError`] values so callers can tell a transport
//! failure from a malformed reply — mapping either to user-facing
//! placeholder text happens at the chat boundary, never here.

pub mod google;
pub mod wire;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::Language;

pub use google::GoogleTranslateClient;

/// Detected source language of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Language code reported by the service (e.g. `"en"`). Not restricted
    /// to the widget's target languages.
    pub code: String,
}

impl Detection {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Whether the detected code names `language`.
    pub fn is(&self, language: Language) -> bool {
        self.code == language.code()
    }
}

/// A completed translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text, segments joined with single spaces.
    pub text: String,
    /// The language that was requested.
    pub target: Language,
}

/// Failures from the translation service.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned status {0}")]
    Status(u16),

    /// The payload did not have the expected shape.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Language detection and translation, implemented over some transport.
///
/// Implementations must be shareable across tasks; the widget shell issues
/// one call per user action with no retry policy.
#[async_trait]
pub trait TranslateProvider: Send + Sync {
    /// Detect the source language of `text`.
    async fn detect_language(&self, text: &str) -> Result<Detection, TranslateError>;

    /// Translate `text` into `target`.
    async fn translate(&self, text: &str, target: Language)
        -> Result<Translation, TranslateError>;
}
