//! Shared domain types for slide navigation

use std::fmt;

/// Which way a transition moves through the panel sequence.
///
/// The direction picks one slot out of each configured `[backward, forward]`
/// animation pair. Moving to a higher index is [`Direction::Forward`] and
/// selects slot 1; anything else selects slot 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards a lower index
    Backward,
    /// Towards a higher index
    Forward,
}

impl Direction {
    /// Direction of a move from `from` to `to`.
    ///
    /// Only the sign of `to - from` matters, so 2->3 and 2->5 agree.
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Index into a `[backward, forward]` animation name pair
    pub fn slot(self) -> usize {
        match self {
            Direction::Backward => 0,
            Direction::Forward => 1,
        }
    }

    /// Pick this direction's entry out of a two-slot pair
    pub fn pick<T>(self, pair: &[T; 2]) -> &T {
        &pair[self.slot()]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Backward => write!(f, "backward"),
            Direction::Forward => write!(f, "forward"),
        }
    }
}

/// One recognised swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Normalized navigation request derived from raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Go to the next panel
    Advance,
    /// Go to the previous panel
    Retreat,
    /// Go directly to a panel index
    Goto(usize),
}

/// Lifecycle phase of the slide state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlidePhase {
    /// No transition in flight; navigation is accepted
    #[default]
    Idle,
    /// A transition is animating; navigation is dropped
    Transitioning,
}
