//! Message types for the application (TEA pattern)

use std::time::Instant;

use crate::input_key::InputKey;
use slidepage_core::{Intent, SwipeDirection};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Vertical wheel movement (positive = scroll down)
    Wheel { delta_y: f64 },

    /// Swipe recognised from a pointer drag
    Swipe(SwipeDirection),

    /// Normalized navigation request
    Navigate(Intent),

    /// A panel animation reported its end
    AnimationEnded,

    /// Periodic tick driving animations
    Tick(Instant),

    /// Leave the presentation
    Quit,
}
