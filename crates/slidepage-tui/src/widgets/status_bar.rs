//! Status bar: transition state on the left, key hints on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use slidepage_app::AppState;

use crate::theme::styles;

const KEY_HINTS: &str = "↑/↓ move  1-9 jump  q quit ";

/// Plain-text summary of where the presenter is
pub fn status_text(state: &AppState) -> String {
    let slides = &state.slides;
    if slides.is_inert() {
        let count = slides.diagnostics().len();
        return format!(
            "inactive · {count} diagnostic{}",
            if count == 1 { "" } else { "s" }
        );
    }
    if slides.is_empty() {
        return "no slides".to_string();
    }
    let position = format!("slide {}/{}", slides.active() + 1, slides.len());
    match slides.direction() {
        Some(direction) if slides.is_transitioning() => {
            format!("{position} · sliding {direction}")
        }
        _ => position,
    }
}

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, styles::bar());

        let (dot, dot_style) = if self.state.slides.is_transitioning() {
            ("●", styles::sliding_indicator())
        } else {
            ("○", styles::idle_indicator())
        };
        Paragraph::new(Line::from(vec![
            Span::styled(" ", styles::bar()),
            Span::styled(dot, dot_style),
            Span::styled(" ", styles::bar()),
            Span::styled(status_text(self.state), styles::bar()),
        ]))
        .render(area, buf);

        let hints_width = KEY_HINTS.chars().count() as u16;
        if hints_width + 30 <= area.width {
            let hints = Rect::new(area.x + area.width - hints_width, area.y, hints_width, 1);
            Paragraph::new(Span::styled(KEY_HINTS, styles::hint())).render(hints, buf);
        }
    }
}
