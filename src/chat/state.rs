//! Chat widget application state.
//!
//! All widget state lives in [`ChatState`] and changes only through
//! [`ChatWidget::update`](super::update::ChatWidget::update); rendering
//! reads the state and nothing else. There is no shared mutable UI state —
//! the transcript, offers, and pending request are plain data.

use crate::types::Language;

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Display label used in the transcript.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "AI",
        }
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub body: String,
}

impl Message {
    pub fn user(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            body: body.into(),
        }
    }

    pub fn assistant(body: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            body: body.into(),
        }
    }
}

/// Follow-up actions offered for a submitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    /// The submitted text the offer applies to.
    pub text: String,
    /// Languages shown in the translation dropdown.
    pub translate_targets: Vec<Language>,
    /// Whether a summary is offered for this text.
    pub summarize: bool,
}

/// An in-flight service request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Detection { text: String },
    Translation { text: String, target: Language },
}

/// Complete widget state: transcript, offers, input error, in-flight request.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    /// Transcript in display order.
    pub messages: Vec<Message>,
    /// One entry per submitted text, oldest first.
    pub offers: Vec<Offer>,
    /// Set when the last submit was rejected, cleared by a valid one.
    pub input_error: Option<String>,
    /// The service call the shell is currently performing, if any.
    pub pending: Option<PendingRequest>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent offer, if any.
    pub fn latest_offer(&self) -> Option<&Offer> {
        self.offers.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.label(), "You");
        assert_eq!(Sender::Assistant.label(), "AI");
    }

    #[test]
    fn test_message_constructors() {
        let m = Message::user("hi");
        assert_eq!(m.sender, Sender::User);
        assert_eq!(m.body, "hi");

        let m = Message::assistant("hello");
        assert_eq!(m.sender, Sender::Assistant);
    }

    #[test]
    fn test_latest_offer() {
        let mut state = ChatState::new();
        assert!(state.latest_offer().is_none());

        state.offers.push(Offer {
            text: "first".into(),
            translate_targets: vec![Language::En],
            summarize: false,
        });
        state.offers.push(Offer {
            text: "second".into(),
            translate_targets: vec![Language::En],
            summarize: true,
        });
        assert_eq!(state.latest_offer().unwrap().text, "second");
    }
}
