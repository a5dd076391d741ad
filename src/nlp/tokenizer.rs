//! Word tokenization
//!
//! Extracts lowercase word tokens from text. A token is a maximal run of
//! ASCII word characters (letters, digits, underscore); everything else acts
//! as a separator and is discarded, so punctuation and repeated whitespace
//! collapse away.

/// Returns `true` for characters that may appear inside a word token.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize `text` into lowercase word tokens.
///
/// Uppercase ASCII letters are folded during the scan, so `"The cat"` yields
/// `["the", "cat"]`. Non-ASCII characters are separators, never token
/// content. Text with no word characters yields an empty list.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if is_word_char(c) {
            current.push(c.to_ascii_lowercase());
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
