//! SlidePage Library
//!
//! A one-slide-at-a-time presenter. The crates are re-exported under short
//! names so the binary and integration tests share one import path.

pub mod check;

pub use slidepage_app as app;
pub use slidepage_core as core;
pub use slidepage_tui as tui;

// Re-export main entry points
pub use check::CheckReport;
pub use tui::run;
