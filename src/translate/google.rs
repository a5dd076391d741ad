//! HTTP client for the public translate endpoint.
//!
//! Issues a single unauthenticated GET per operation against
//! `/translate_a/single?client=gtx&sl=auto&tl=<code>&dt=t&q=<text>`.
//! Detection reuses the same endpoint with an English target and reads the
//! detected source language out of the reply. No retry policy.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::wire;
use super::{Detection, TranslateError, TranslateProvider, Translation};
use crate::types::Language;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the `gtx` translate endpoint.
pub struct GoogleTranslateClient {
    base_url: String,
    client: reqwest::Client,
}

impl GoogleTranslateClient {
    /// Create a client against the public endpoint.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn query_params<'a>(target: &'a str, text: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ]
    }

    async fn fetch(&self, target: &str, text: &str) -> Result<Value, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url);
        debug!(lang = target, chars = text.len(), "requesting translation");

        let response = self
            .client
            .get(&url)
            .query(&Self::query_params(target, text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "translate endpoint returned an error status");
            return Err(TranslateError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslateProvider for GoogleTranslateClient {
    async fn detect_language(&self, text: &str) -> Result<Detection, TranslateError> {
        // Any target works for detection; the reply carries the source code.
        let body = self.fetch(Language::En.code(), text).await?;
        wire::parse_detected_language(&body).map(Detection::new)
    }

    async fn translate(
        &self,
        text: &str,
        target: Language,
    ) -> Result<Translation, TranslateError> {
        let body = self.fetch(target.code(), text).await?;
        let translated = wire::parse_translation(&body)?;
        Ok(Translation {
            text: translated,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let params = GoogleTranslateClient::query_params("fr", "hello world");
        assert_eq!(params[0], ("client", "gtx"));
        assert_eq!(params[1], ("sl", "auto"));
        assert_eq!(params[2], ("tl", "fr"));
        assert_eq!(params[3], ("dt", "t"));
        assert_eq!(params[4], ("q", "hello world"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GoogleTranslateClient::new().with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_default_base_url() {
        let client = GoogleTranslateClient::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
