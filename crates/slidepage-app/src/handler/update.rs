//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, tick::handle_tick, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Wheel { delta_y } => {
            state.slides.on_wheel(delta_y);
            UpdateResult::none()
        }

        Message::Swipe(direction) => {
            state.slides.on_swipe(direction);
            UpdateResult::none()
        }

        Message::Navigate(intent) => {
            state.slides.apply(intent);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Animation
        // ─────────────────────────────────────────────────────────
        Message::AnimationEnded => {
            state.slides.on_animation_end();
            UpdateResult::none()
        }

        Message::Tick(now) => handle_tick(state, now),

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }
    }
}
