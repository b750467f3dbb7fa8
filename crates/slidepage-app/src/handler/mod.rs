//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key bindings
//! - `tick`: Animation tick handling

pub(crate) mod keys;
pub(crate) mod tick;
pub(crate) mod update;


use crate::message::Message;
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

/// Result of processing one message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Run a message and every follow-up message it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        next = update(state, msg).message;
    }
}
