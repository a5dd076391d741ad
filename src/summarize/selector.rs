//! Sentence scoring and selection
//!
//! Splits a document on the literal `". "` delimiter, scores each sentence
//! against the document frequency table, and keeps the highest-scoring
//! sentences. Selection order is score-descending; equal scores keep their
//! document order.

use super::frequency::WordFrequencyTable;

/// Literal delimiter between sentences, consumed by the split and re-used
/// when joining the summary.
pub const SENTENCE_DELIMITER: &str = ". ";

/// A sentence paired with its frequency score and document position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    /// Original sentence text, exactly as it appeared between delimiters.
    pub text: &'a str,
    /// Zero-based position in the document.
    pub index: usize,
    /// Sum of document-wide counts for each token occurrence.
    pub score: u64,
}

/// Split `text` on the literal `". "` delimiter.
///
/// The delimiter is consumed. A trailing sentence keeps whatever terminal
/// punctuation it has: `"A. B."` splits into `["A", "B."]`, and text ending
/// in `". "` yields a final empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_DELIMITER).collect()
}

/// Score every sentence against `table`, preserving document order.
pub fn score_sentences<'a>(
    sentences: &[&'a str],
    table: &WordFrequencyTable,
) -> Vec<ScoredSentence<'a>> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            text,
            index,
            score: table.score(text),
        })
        .collect()
}

/// Keep the `target` highest-scoring sentences, score-descending.
///
/// The sort is stable, so sentences with equal scores stay in document
/// order. This tie-break is part of the contract: selection is fully
/// deterministic for any input.
pub fn select_top(mut scored: Vec<ScoredSentence<'_>>, target: usize) -> Vec<ScoredSentence<'_>> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(target);
    scored
}
