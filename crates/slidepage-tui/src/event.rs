//! Terminal event polling

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use slidepage_app::message::Message;
use slidepage_app::InputKey;
use slidepage_core::prelude::*;
use std::time::Duration;

use crate::gesture::SwipeRecognizer;

/// Wheel delta reported per notch, matching the sign convention of
/// `Message::Wheel` (positive = scroll down)
const WHEEL_NOTCH: f64 = 1.0;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a mouse event into a wheel or swipe message.
///
/// Left-button press/release pairs feed the swipe recognizer; drags in
/// between are ignored.
pub fn mouse_event_to_message(
    mouse: MouseEvent,
    swipes: &mut SwipeRecognizer,
) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Message::Wheel {
            delta_y: WHEEL_NOTCH,
        }),
        MouseEventKind::ScrollUp => Some(Message::Wheel {
            delta_y: -WHEEL_NOTCH,
        }),
        MouseEventKind::Down(MouseButton::Left) => {
            swipes.press(mouse.column, mouse.row);
            None
        }
        MouseEventKind::Up(MouseButton::Left) => swipes
            .release(mouse.column, mouse.row)
            .map(Message::Swipe),
        _ => None,
    }
}

/// Convert any terminal event into a message
pub fn event_to_message(event: Event, swipes: &mut SwipeRecognizer) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, swipes),
        _ => None,
    }
}

/// Poll for terminal events, waiting at most `timeout`
pub fn poll(swipes: &mut SwipeRecognizer, timeout: Duration) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        let event = event::read()?;
        let message = event_to_message(event, swipes);
        if let Some(msg) = &message {
            trace!("terminal event -> {:?}", msg);
        }
        Ok(message)
    } else {
        Ok(None)
    }
}
