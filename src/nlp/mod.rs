//! Natural Language Processing components
//!
//! This module provides word tokenization and stopword filtering for the
//! summarization core.

pub mod stopwords;
pub mod tokenizer;
