//! Extractive summarization
//!
//! Produces a summary by selecting the highest-scoring original sentences,
//! where a sentence's score is the sum of document-wide frequency counts of
//! its word tokens. The summary is those sentences joined most-important
//! first — extraction and reordering, never generated text.

pub mod frequency;
pub mod selector;

use crate::nlp::stopwords::StopwordFilter;

use self::frequency::WordFrequencyTable;
use self::selector::{score_sentences, select_top, split_sentences, SENTENCE_DELIMITER};

/// Returned for empty input.
pub const FALLBACK_SUMMARY: &str = "Summary unavailable.";

/// Default number of sentences kept in a summary.
pub const DEFAULT_TARGET_SENTENCES: usize = 3;

/// Configuration for [`Summarizer`].
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Number of sentences to keep. Values below 1 are treated as 1.
    pub target_sentences: usize,
    /// Optional stopword filter. When set, stopwords carry no weight in
    /// scoring. Unset by default, so every token counts.
    pub stopwords: Option<StopwordFilter>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            target_sentences: DEFAULT_TARGET_SENTENCES,
            stopwords: None,
        }
    }
}

/// Frequency-based extractive summarizer.
///
/// Each call is a pure function of its input: the frequency table and
/// sentence scores are rebuilt from scratch and discarded afterwards, so
/// concurrent calls never interact.
///
/// Summarization is not idempotent — feeding a summary back in may shorten
/// it further, or return it unchanged once it fits the target.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    /// Create a summarizer with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config }
    }

    /// Set the number of sentences to keep (minimum 1).
    pub fn with_target_sentences(mut self, target: usize) -> Self {
        self.config.target_sentences = target.max(1);
        self
    }

    /// Exclude stopwords from frequency counting and scoring.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.config.stopwords = Some(stopwords);
        self
    }

    /// Summarize `text` down to the configured number of sentences.
    ///
    /// Empty input returns [`FALLBACK_SUMMARY`]. Input with no more
    /// sentences than the target is returned verbatim. Otherwise the
    /// highest-scoring sentences (ties in document order) are joined with
    /// `". "` and a single trailing `"."` is appended.
    pub fn summarize(&self, text: &str) -> String {
        if text.is_empty() {
            return FALLBACK_SUMMARY.to_string();
        }

        let target = self.config.target_sentences.max(1);
        let sentences = split_sentences(text);
        if sentences.len() <= target {
            return text.to_string();
        }

        let table = match &self.config.stopwords {
            Some(filter) => WordFrequencyTable::from_text_filtered(text, filter),
            None => WordFrequencyTable::from_text(text),
        };

        let scored = score_sentences(&sentences, &table);
        let top = select_top(scored, target);

        let mut summary = top
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(SENTENCE_DELIMITER);
        summary.push('.');
        summary
    }
}

/// Summarize with the default three-sentence target.
pub fn summarize(text: &str) -> String {
    Summarizer::new().summarize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT_TEXT: &str = "The cat sat. The cat sat on the mat. Dogs bark loudly at night.";

    #[test]
    fn test_empty_input_fallback() {
        assert_eq!(summarize(""), FALLBACK_SUMMARY);
        // Independent of the target.
        let s = Summarizer::new().with_target_sentences(7);
        assert_eq!(s.summarize(""), FALLBACK_SUMMARY);
    }

    #[test]
    fn test_short_input_returned_verbatim() {
        // Three sentences, target three: no summarization, no added period.
        assert_eq!(summarize(CAT_TEXT), CAT_TEXT);

        let s = Summarizer::new().with_target_sentences(1);
        assert_eq!(s.summarize("just one sentence"), "just one sentence");
    }

    #[test]
    fn test_repeated_words_win() {
        let s = Summarizer::new().with_target_sentences(2);
        assert_eq!(
            s.summarize(CAT_TEXT),
            "The cat sat on the mat. The cat sat."
        );
    }

    #[test]
    fn test_tie_break_is_document_order() {
        // Every sentence scores 1; the first three are kept.
        assert_eq!(summarize("A. B. C. D."), "A. B. C.");
    }

    #[test]
    fn test_selected_final_sentence_keeps_its_period() {
        let s = Summarizer::new().with_target_sentences(1);
        // The document-final sentence wins and already ends with a period,
        // so the appended one doubles it.
        assert_eq!(
            s.summarize("x y. x z. x y z x y z."),
            "x y z x y z.."
        );
    }

    #[test]
    fn test_output_no_longer_than_target() {
        let text = "a b. c d. e f. g h. i j.";
        for target in 1..=4 {
            let s = Summarizer::new().with_target_sentences(target);
            let out = s.summarize(text);
            let count = out.split(SENTENCE_DELIMITER).count();
            assert!(count <= target, "target {target} produced {count} sentences");
        }
    }

    #[test]
    fn test_zero_target_clamped_to_one() {
        let s = Summarizer::new().with_target_sentences(0);
        let out = s.summarize("a b. c d. e f. g h.");
        assert_eq!(out.split(SENTENCE_DELIMITER).count(), 1);
    }

    #[test]
    fn test_superset_sentence_scores_at_least_as_high() {
        // Sentence 2 contains every token of sentence 1 plus more, so it
        // must score at least as high and be selected first.
        let s = Summarizer::new().with_target_sentences(1);
        let out = s.summarize("red fish. red fish blue fish. green plant here now.");
        assert_eq!(out, "red fish blue fish.");
    }

    #[test]
    fn test_all_zero_scores_keep_order() {
        let s = Summarizer::new().with_target_sentences(2);
        // Purely punctuation sentences all score 0.
        assert_eq!(s.summarize("?. !. ;. ,."), "?. !.");
    }

    #[test]
    fn test_default_target_is_three() {
        let text = "w w w w. x x x. y y. z. q.";
        let out = summarize(text);
        assert_eq!(out, "w w w w. x x x. y y.");
    }

    #[test]
    fn test_stopword_filtering_changes_ranking() {
        // Unfiltered, "the the the" dominates through sheer stopword mass.
        let text = "the the the. storm flooded harbor. storm storm warning. calm sea.";
        let plain = Summarizer::new().with_target_sentences(1);
        assert_eq!(plain.summarize(text), "the the the.");

        // Filtered, the repeated content word wins instead.
        let filtered = Summarizer::new()
            .with_target_sentences(1)
            .with_stopwords(StopwordFilter::from_list(&["the"]));
        assert_eq!(filtered.summarize(text), "storm storm warning.");
    }
}
