//! Color palette for the presenter

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const BAR_BG: Color = Color::DarkGray; // Header and status bar

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Headings, slide counter

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Idle
pub const STATUS_YELLOW: Color = Color::Yellow; // Transitioning
pub const STATUS_RED: Color = Color::Red; // Diagnostics
