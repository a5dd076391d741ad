//! Transcript rendering — state in, lines out.
//!
//! Rendering is a pure projection of [`ChatState`]; it never mutates and
//! holds no state of its own, so a shell can re-render from scratch after
//! every update.

use super::state::ChatState;

/// Render the transcript as `"<label>: <body>"` lines, oldest first.
pub fn transcript(state: &ChatState) -> Vec<String> {
    state
        .messages
        .iter()
        .map(|m| format!("{}: {}", m.sender.label(), m.body))
        .collect()
}

/// Current input error, if the last submit was rejected.
pub fn input_error(state: &ChatState) -> Option<&str> {
    state.input_error.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::state::Message;

    #[test]
    fn test_transcript_lines() {
        let mut state = ChatState::new();
        state.messages.push(Message::user("hello"));
        state.messages.push(Message::assistant("Detected Language: en"));

        assert_eq!(
            transcript(&state),
            vec!["You: hello", "AI: Detected Language: en"]
        );
    }

    #[test]
    fn test_empty_state_renders_nothing() {
        let state = ChatState::new();
        assert!(transcript(&state).is_empty());
        assert!(input_error(&state).is_none());
    }

    #[test]
    fn test_input_error_surfaced() {
        let mut state = ChatState::new();
        state.input_error = Some("Please enter some text before sending.".into());
        assert_eq!(
            input_error(&state),
            Some("Please enter some text before sending.")
        );
    }
}
