//! Event handling — the single place widget state changes.
//!
//! [`ChatWidget::update`] consumes an [`Event`], mutates the [`ChatState`],
//! and returns the [`Command`]s the shell must carry out (service calls).
//! Service results come back as further events, closing the loop. Failed
//! service calls are mapped to their placeholder strings here, at the
//! user-facing boundary — the service layer itself reports typed errors.

use tracing::debug;

use super::state::{ChatState, Message, Offer, PendingRequest};
use crate::config::WidgetSpec;
use crate::summarize::Summarizer;
use crate::translate::{Detection, TranslateError, Translation};
use crate::types::Language;

/// Shown in place of a detected language when detection fails.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Shown in place of a translation when the service call fails.
pub const TRANSLATION_UNAVAILABLE: &str = "Translation unavailable.";

/// Input error for a blank submit.
pub const EMPTY_INPUT_ERROR: &str = "Please enter some text before sending.";

/// An input to the widget: user activity or a completed service call.
#[derive(Debug)]
pub enum Event {
    /// The user pressed send.
    Submitted { text: String },
    /// Language detection finished.
    LanguageDetected(Result<Detection, TranslateError>),
    /// The user picked a translation target for the latest offer.
    TranslationRequested { target: Language },
    /// Translation finished.
    TranslationReceived(Result<Translation, TranslateError>),
    /// The user asked for the offered summary.
    SummaryRequested,
}

/// A side effect the shell must perform with its
/// [`TranslateProvider`](crate::translate::TranslateProvider), feeding the
/// result back as an [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    DetectLanguage { text: String },
    Translate { text: String, target: Language },
}

/// The event-handling layer: widget configuration plus the summarizer built
/// from it.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    spec: WidgetSpec,
    summarizer: Summarizer,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(WidgetSpec::default())
    }
}

impl ChatWidget {
    /// Build a widget from a spec. Validate the spec first with
    /// [`ValidationEngine`](crate::config::ValidationEngine); this
    /// constructor clamps rather than rejects.
    pub fn new(spec: WidgetSpec) -> Self {
        let summarizer = Summarizer::new().with_target_sentences(spec.summary.target_sentences);
        Self { spec, summarizer }
    }

    /// Apply `event` to `state`, returning commands for the shell.
    pub fn update(&self, state: &mut ChatState, event: Event) -> Vec<Command> {
        match event {
            Event::Submitted { text } => self.on_submitted(state, text),
            Event::LanguageDetected(result) => {
                self.on_language_detected(state, result);
                Vec::new()
            }
            Event::TranslationRequested { target } => {
                self.on_translation_requested(state, target)
            }
            Event::TranslationReceived(result) => {
                Self::on_translation_received(state, result);
                Vec::new()
            }
            Event::SummaryRequested => {
                self.on_summary_requested(state);
                Vec::new()
            }
        }
    }

    /// Translation targets from the spec; unknown codes are skipped (they
    /// are validation errors, not runtime failures).
    fn translate_targets(&self) -> Vec<Language> {
        self.spec
            .translation
            .targets
            .iter()
            .filter_map(|code| Language::from_code(code))
            .collect()
    }

    fn on_submitted(&self, state: &mut ChatState, text: String) -> Vec<Command> {
        let text = text.trim().to_string();
        if text.is_empty() {
            state.input_error = Some(EMPTY_INPUT_ERROR.to_string());
            return Vec::new();
        }

        state.input_error = None;
        state.messages.push(Message::user(text.clone()));
        state.pending = Some(PendingRequest::Detection { text: text.clone() });
        vec![Command::DetectLanguage { text }]
    }

    fn on_language_detected(
        &self,
        state: &mut ChatState,
        result: Result<Detection, TranslateError>,
    ) {
        let Some(PendingRequest::Detection { text }) = state.pending.take() else {
            debug!("dropping detection result with no pending request");
            return;
        };

        let code = match result {
            Ok(detection) => detection.code,
            Err(err) => {
                debug!(error = %err, "language detection failed");
                UNKNOWN_LANGUAGE.to_string()
            }
        };

        state
            .messages
            .push(Message::assistant(format!("Detected Language: {code}")));

        let summarize = code == self.spec.summary.language.code()
            && text.chars().count() > self.spec.summary.min_chars;
        state.offers.push(Offer {
            text,
            translate_targets: self.translate_targets(),
            summarize,
        });
    }

    fn on_translation_requested(&self, state: &mut ChatState, target: Language) -> Vec<Command> {
        let Some(offer) = state.latest_offer() else {
            debug!("translation requested with nothing submitted");
            return Vec::new();
        };
        if !offer.translate_targets.contains(&target) {
            debug!(lang = %target, "translation requested for an unoffered target");
            return Vec::new();
        }

        let text = offer.text.clone();
        state.pending = Some(PendingRequest::Translation {
            text: text.clone(),
            target,
        });
        vec![Command::Translate { text, target }]
    }

    fn on_translation_received(state: &mut ChatState, result: Result<Translation, TranslateError>) {
        if !matches!(state.pending, Some(PendingRequest::Translation { .. })) {
            debug!("dropping translation result with no pending request");
            return;
        }
        state.pending = None;

        let text = match result {
            Ok(translation) => translation.text,
            Err(err) => {
                debug!(error = %err, "translation failed");
                TRANSLATION_UNAVAILABLE.to_string()
            }
        };

        state
            .messages
            .push(Message::assistant(format!("Translated: {text}")));
    }

    fn on_summary_requested(&self, state: &mut ChatState) {
        let Some(offer) = state.latest_offer() else {
            return;
        };
        if !offer.summarize {
            debug!("summary requested but none was offered");
            return;
        }

        // Pure and synchronous: no command, the summary lands immediately.
        let summary = self.summarizer.summarize(&offer.text);
        state
            .messages
            .push(Message::assistant(format!("Summary: {summary}")));
    }
}
