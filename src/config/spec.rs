//! Widget specification types.
//!
//! A [`WidgetSpec`] describes one widget instance: how summaries are cut,
//! when the summarize offer appears, and which translation targets the
//! dropdown shows. These types are the input to the
//! [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "summary": { "target_sentences": 3, "min_chars": 150, "language": "en" },
//!   "translation": { "targets": ["en", "pt", "es", "ru", "tr", "fr"] },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::summarize::DEFAULT_TARGET_SENTENCES;
use crate::types::Language;

/// Top-level widget specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Summarization settings.
    #[serde(default)]
    pub summary: SummarySpec,

    /// Translation settings.
    #[serde(default)]
    pub translation: TranslationSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl WidgetSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for WidgetSpec {
    fn default() -> Self {
        Self {
            v: 1,
            summary: SummarySpec::default(),
            translation: TranslationSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Summarization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Number of sentences kept in a summary.
    #[serde(default = "default_target_sentences")]
    pub target_sentences: usize,

    /// Submitted text must be strictly longer than this many characters for
    /// the summarize offer to appear.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Only text detected as this language is offered a summary.
    #[serde(default = "default_summary_language")]
    pub language: Language,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarySpec {
    fn default() -> Self {
        Self {
            target_sentences: default_target_sentences(),
            min_chars: default_min_chars(),
            language: default_summary_language(),
            unknown_fields: HashMap::new(),
        }
    }
}

/// Translation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationSpec {
    /// Language codes offered in the translation dropdown. Kept as raw
    /// strings so validation can report unknown codes instead of failing
    /// deserialization.
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for TranslationSpec {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            unknown_fields: HashMap::new(),
        }
    }
}

fn default_target_sentences() -> usize {
    DEFAULT_TARGET_SENTENCES
}

fn default_min_chars() -> usize {
    150
}

fn default_summary_language() -> Language {
    Language::En
}

fn default_targets() -> Vec<String> {
    Language::ALL.iter().map(|l| l.code().to_string()).collect()
}
