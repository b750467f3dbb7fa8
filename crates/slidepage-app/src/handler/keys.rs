//! Key bindings
//!
//! Vertical keys navigate; left/right are deliberately unbound, the same
//! way horizontal swipes are.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use slidepage_core::Intent;

/// Map a key to a follow-up message
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    let intent = match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => {
            return Some(Message::Quit)
        }

        InputKey::Down
        | InputKey::PageDown
        | InputKey::Enter
        | InputKey::Char(' ')
        | InputKey::Char('j') => Intent::Advance,

        InputKey::Up | InputKey::PageUp | InputKey::Backspace | InputKey::Char('k') => {
            Intent::Retreat
        }

        InputKey::Home | InputKey::Char('g') => Intent::Goto(0),
        InputKey::End | InputKey::Char('G') => Intent::Goto(state.slides.len().checked_sub(1)?),

        InputKey::Char(c @ '1'..='9') => Intent::Goto(c as usize - '1' as usize),

        _ => return None,
    };
    Some(Message::Navigate(intent))
}
