//! slidepage-app - Slide widget core and application state for SlidePage
//!
//! Contains the transition state machine, the widget facade that wires
//! input and animation signals into it, the deck container and keyframe
//! animator used by the terminal front end, configuration loading, and the
//! TEA (The Elm Architecture) message/update loop.

pub mod animation;
pub mod config;
pub mod container;
pub mod deck;
pub mod handler;
pub mod hooks;
pub mod input;
pub mod input_key;
pub mod machine;
pub mod message;
pub mod state;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types
pub use animation::{Animator, Keyframe, Motion};
pub use container::Container;
pub use deck::{Deck, DeckPanel};
pub use handler::{process_message, update, UpdateResult};
pub use hooks::{SlideHooks, Verdict};
pub use input::RawInput;
pub use input_key::InputKey;
pub use machine::SlideMachine;
pub use message::Message;
pub use state::{AppPhase, AppState};
pub use widget::SlidePage;
