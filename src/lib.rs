//! briefwire — the summarization and translation core of a chat widget.
//!
//! The heart of the crate is frequency-based extractive summarization: a
//! document's sentences are scored by the document-wide frequency of their
//! word tokens, and the highest-scoring sentences become the summary, most
//! important first ([`summarize`]).
//!
//! Around that core sit the widget's collaborators:
//!
//! - [`translate`] — language detection and translation over a remote
//!   endpoint, behind the [`TranslateProvider`] trait with typed errors.
//! - [`chat`] — the widget's application state and its unidirectional
//!   event → update → render loop, where service failures become
//!   placeholder text.
//! - [`config`] — the JSON widget spec and its validation engine.
//! - [`nlp`] — word tokenization and stopword filtering.
//!
//! # Quick start
//!
//! ```rust
//! use briefwire::summarize::Summarizer;
//!
//! let summarizer = Summarizer::new().with_target_sentences(2);
//! let summary = summarizer.summarize(
//!     "The cat sat. The cat sat on the mat. Dogs bark loudly at night.",
//! );
//! assert_eq!(summary, "The cat sat on the mat. The cat sat.");
//! ```

pub mod chat;
pub mod config;
pub mod nlp;
pub mod summarize;
pub mod translate;
pub mod types;

pub use chat::{ChatState, ChatWidget, Command, Event};
pub use config::{ValidationEngine, WidgetSpec};
pub use summarize::{summarize, Summarizer, SummarizerConfig};
pub use translate::{GoogleTranslateClient, TranslateError, TranslateProvider};
pub use types::Language;
