//! Chat widget application layer.
//!
//! A unidirectional loop over explicit state: the shell feeds [`Event`]s to
//! [`ChatWidget::update`], performs the returned [`Command`]s against a
//! [`TranslateProvider`](crate::translate::TranslateProvider), and re-renders
//! the transcript from [`ChatState`] with [`render::transcript`].

pub mod render;
pub mod state;
pub mod update;

pub use state::{ChatState, Message, Offer, PendingRequest, Sender};
pub use update::{ChatWidget, Command, Event};
