//! Input normalization
//!
//! Maps raw input sources onto navigation intents. Wheel and swipe input
//! collapse to advance/retreat; direct index requests pass through as
//! `Goto` and are still subject to the state machine's guards.

use slidepage_core::{Intent, SwipeDirection};

/// A raw navigation input, before normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Vertical wheel movement; positive is "scroll down"
    Wheel { delta_y: f64 },
    /// A recognised swipe gesture
    Swipe(SwipeDirection),
    /// Direct request for a panel index
    Show(usize),
}

impl From<SwipeDirection> for RawInput {
    fn from(direction: SwipeDirection) -> Self {
        RawInput::Swipe(direction)
    }
}

/// Positive delta advances; zero, negative and NaN retreat.
pub fn wheel_intent(delta_y: f64) -> Intent {
    if delta_y > 0.0 {
        Intent::Advance
    } else {
        Intent::Retreat
    }
}

/// Vertical swipes navigate. Horizontal swipes are recognised but left
/// unmapped.
pub fn swipe_intent(direction: SwipeDirection) -> Option<Intent> {
    if !direction.is_vertical() {
        return None;
    }
    match direction {
        SwipeDirection::Down => Some(Intent::Advance),
        _ => Some(Intent::Retreat),
    }
}

/// Normalize any raw input into an intent
pub fn to_intent(input: RawInput) -> Option<Intent> {
    match input {
        RawInput::Wheel { delta_y } => Some(wheel_intent(delta_y)),
        RawInput::Swipe(direction) => swipe_intent(direction),
        RawInput::Show(index) => Some(Intent::Goto(index)),
    }
}
