//! Theme: palette constants and composed styles

pub mod palette;
pub mod styles;
