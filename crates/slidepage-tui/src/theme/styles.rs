//! Composed styles used by the widgets

use ratatui::style::{Modifier, Style};

use super::palette;

pub fn bar() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY).bg(palette::BAR_BG)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn body() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

/// Panel fading in or out past its midpoint
pub fn faded() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn counter() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .bg(palette::BAR_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn hint() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .bg(palette::BAR_BG)
}

pub fn idle_indicator() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .bg(palette::BAR_BG)
}

pub fn sliding_indicator() -> Style {
    Style::default()
        .fg(palette::STATUS_YELLOW)
        .bg(palette::BAR_BG)
}

pub fn diagnostic() -> Style {
    Style::default().fg(palette::STATUS_RED)
}
