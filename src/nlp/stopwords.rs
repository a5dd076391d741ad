//! Stopword filtering
//!
//! This module wraps the `stop-words` crate word lists for the widget's
//! supported languages, with support for custom stopword lists. Filtering is
//! opt-in for the summarizer; the default scoring weighs every token.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::Language;

/// A set of words excluded from frequency counting when enabled.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::En)
    }
}

impl StopwordFilter {
    /// Create a stopword filter for one of the widget's languages.
    pub fn new(language: Language) -> Self {
        let lang = match language {
            Language::En => LANGUAGE::English,
            Language::Pt => LANGUAGE::Portuguese,
            Language::Es => LANGUAGE::Spanish,
            Language::Ru => LANGUAGE::Russian,
            Language::Tr => LANGUAGE::Turkish,
            Language::Fr => LANGUAGE::French,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
