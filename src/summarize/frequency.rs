//! Document-level word frequency counting
//!
//! The frequency table drives sentence importance: a sentence's score is the
//! sum of the document-wide occurrence counts of its tokens. The table is
//! built fresh for every summarization call and discarded afterwards.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::tokenize;

/// Per-document token occurrence counts.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl WordFrequencyTable {
    /// Count every token occurrence across the whole document.
    pub fn from_text(text: &str) -> Self {
        Self::build(text, None)
    }

    /// Count token occurrences, skipping words in `stopwords`.
    pub fn from_text_filtered(text: &str, stopwords: &StopwordFilter) -> Self {
        Self::build(text, Some(stopwords))
    }

    fn build(text: &str, stopwords: Option<&StopwordFilter>) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for token in tokenize(text) {
            if let Some(filter) = stopwords {
                if filter.is_stopword(&token) {
                    continue;
                }
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `token`, 0 if absent.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of counts for every token occurrence in `text`.
    ///
    /// A token appearing twice contributes its document-wide count twice.
    /// Text with no word tokens scores 0.
    pub fn score(&self, text: &str) -> u64 {
        tokenize(text).iter().map(|t| self.count(t)).sum()
    }

    /// Number of distinct tokens in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_document() {
        let table = WordFrequencyTable::from_text("The cat sat. The cat sat on the mat");

        assert_eq!(table.count("the"), 3);
        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("sat"), 2);
        assert_eq!(table.count("mat"), 1);
        assert_eq!(table.count("dog"), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let table = WordFrequencyTable::from_text("Word word WORD");
        assert_eq!(table.count("word"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_sentence_score_sums_occurrences() {
        let table = WordFrequencyTable::from_text("a a a b b c");

        // "a b" scores count(a) + count(b) = 3 + 2.
        assert_eq!(table.score("a b"), 5);
        // Duplicate occurrences each contribute the global count.
        assert_eq!(table.score("a a"), 6);
    }

    #[test]
    fn test_score_unknown_tokens_zero() {
        let table = WordFrequencyTable::from_text("alpha beta");
        assert_eq!(table.score("gamma delta"), 0);
    }

    #[test]
    fn test_score_no_tokens_zero() {
        let table = WordFrequencyTable::from_text("alpha beta");
        assert_eq!(table.score("?! ..."), 0);
        assert_eq!(table.score(""), 0);
    }

    #[test]
    fn test_empty_document() {
        let table = WordFrequencyTable::from_text("");
        assert!(table.is_empty());
        assert_eq!(table.score("anything"), 0);
    }

    #[test]
    fn test_stopword_filtering() {
        let filter = StopwordFilter::from_list(&["the", "on"]);
        let table = WordFrequencyTable::from_text_filtered("The cat sat on the mat", &filter);

        assert_eq!(table.count("the"), 0);
        assert_eq!(table.count("on"), 0);
        assert_eq!(table.count("cat"), 1);
        // Filtered tokens contribute nothing to sentence scores either.
        assert_eq!(table.score("the cat"), 1);
    }
}
