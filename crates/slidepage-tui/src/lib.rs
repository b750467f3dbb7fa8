//! slidepage-tui - Terminal UI for SlidePage
//!
//! This crate provides the ratatui-based presenter. It drives the
//! slidepage-app state with terminal events and draws the deck's visible
//! panels with their current keyframe motion.

pub mod event;
pub mod gesture;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::run;
