//! Swipe recognition from mouse press/release pairs
//!
//! A gesture is one press followed by one release. It produces at most one
//! swipe, along the dominant axis, and only when the pointer travelled far
//! enough. Terminal cells are roughly twice as tall as they are wide, so
//! vertical travel counts double when picking the axis.

use slidepage_core::SwipeDirection;

pub const MIN_VERTICAL_ROWS: u16 = 2;
pub const MIN_HORIZONTAL_COLS: u16 = 4;

#[derive(Debug, Default, Clone)]
pub struct SwipeRecognizer {
    origin: Option<(u16, u16)>,
}

impl SwipeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
    }

    /// Finish the gesture; a release without a press yields nothing
    pub fn release(&mut self, column: u16, row: u16) -> Option<SwipeDirection> {
        let (start_col, start_row) = self.origin.take()?;
        let dx = i32::from(column) - i32::from(start_col);
        let dy = i32::from(row) - i32::from(start_row);

        if dy.abs() * 2 >= dx.abs() {
            if dy.unsigned_abs() < u32::from(MIN_VERTICAL_ROWS) {
                return None;
            }
            Some(if dy > 0 {
                SwipeDirection::Down
            } else {
                SwipeDirection::Up
            })
        } else {
            if dx.unsigned_abs() < u32::from(MIN_HORIZONTAL_COLS) {
                return None;
            }
            Some(if dx > 0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            })
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}
