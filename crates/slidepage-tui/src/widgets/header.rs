//! Header bar: deck title on the left, slide counter and clock on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct Header<'a> {
    title: &'a str,
    position: Option<(usize, usize)>,
    clock: Option<String>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            position: None,
            clock: None,
        }
    }

    /// Zero-based active index and panel count
    pub fn position(mut self, active: usize, len: usize) -> Self {
        if len > 0 {
            self.position = Some((active, len));
        }
        self
    }

    pub fn clock(mut self, clock: Option<String>) -> Self {
        self.clock = clock;
        self
    }

    fn right_spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        if let Some((active, len)) = self.position {
            spans.push(Span::styled(
                format!("{} / {}", active + 1, len),
                styles::counter(),
            ));
        }
        if let Some(clock) = &self.clock {
            spans.push(Span::styled(format!("  {clock}"), styles::hint()));
        }
        spans.push(Span::styled(" ", styles::bar()));
        spans
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, styles::bar());

        let right = self.right_spans();
        let right_width: usize = right.iter().map(|s| s.content.width()).sum();
        let available = (area.width as usize).saturating_sub(right_width + 2);
        let title = truncate(self.title, available);

        Paragraph::new(Line::from(vec![
            Span::styled(" ", styles::bar()),
            Span::styled(title, styles::heading().bg(crate::theme::palette::BAR_BG)),
        ]))
        .render(area, buf);

        if right_width <= area.width as usize {
            let x = area.x + area.width - right_width as u16;
            let right_area = Rect::new(x, area.y, right_width as u16, 1);
            Paragraph::new(Line::from(right)).render(right_area, buf);
        }
    }
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}
