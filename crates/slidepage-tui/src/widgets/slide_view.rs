//! Slide body: draws the deck's visible panels with their current motion

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};
use slidepage_app::{Animator, Deck, DeckPanel, Motion};
use slidepage_core::Error;

use crate::theme::styles;

/// Renders every non-hidden panel of a deck. During a transition the
/// leaving panel is drawn first so the entering one ends up on top.
pub struct SlideView<'a> {
    deck: &'a Deck,
    animator: &'a Animator,
    active: usize,
    now: Instant,
}

impl<'a> SlideView<'a> {
    pub fn new(deck: &'a Deck, animator: &'a Animator, active: usize, now: Instant) -> Self {
        Self {
            deck,
            animator,
            active,
            now,
        }
    }

    fn render_panel(
        &self,
        panel: &DeckPanel,
        motion: Option<Motion>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let height = i32::from(area.height);
        let shift = motion
            .map(|m| (m.offset() * height as f32).round() as i32)
            .unwrap_or(0);
        if shift.abs() >= height {
            return;
        }
        let faded = motion.is_some_and(|m| m.opacity() < 0.5);

        let visible_height = (height - shift.abs()) as u16;
        let (y, scroll) = if shift >= 0 {
            (area.y + shift as u16, 0)
        } else {
            (area.y, (-shift) as u16)
        };
        let target = Rect::new(area.x, y, area.width, visible_height);

        Clear.render(target, buf);
        Paragraph::new(panel_lines(panel, faded))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(target, buf);
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut order: Vec<usize> = self.deck.visible().filter(|&i| i != self.active).collect();
        if self.deck.panel(self.active).is_some_and(|p| !p.hidden) {
            order.push(self.active);
        }

        for index in order {
            if let Some(panel) = self.deck.panel(index) {
                let motion = self.animator.motion(index, self.now);
                self.render_panel(panel, motion, area, buf);
            }
        }
    }
}

fn panel_lines(panel: &DeckPanel, faded: bool) -> Vec<Line<'_>> {
    panel
        .body
        .lines()
        .map(|line| {
            let style = if faded {
                styles::faded()
            } else if line.trim_start().starts_with('#') {
                styles::heading()
            } else {
                styles::body()
            };
            let text = if line.trim_start().starts_with('#') {
                line.trim_start().trim_start_matches('#').trim_start()
            } else {
                line
            };
            Line::from(Span::styled(text, style))
        })
        .collect()
}

/// Body shown when the widget could not start
pub struct Diagnostics<'a> {
    errors: &'a [Error],
}

impl<'a> Diagnostics<'a> {
    pub fn new(errors: &'a [Error]) -> Self {
        Self { errors }
    }
}

impl Widget for Diagnostics<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled("Slides unavailable", styles::heading())),
            Line::default(),
        ];
        lines.extend(
            self.errors
                .iter()
                .map(|e| Line::from(Span::styled(e.to_string(), styles::diagnostic()))),
        );
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use slidepage_app::Container;
    use std::time::Duration;

    fn deck() -> Deck {
        let mut deck = Deck::parse("t", "# Alpha\nfirst body\n---\n# Beta\nsecond body");
        deck.query_panels(r"^---\s*$").unwrap();
        for i in 0..2 {
            deck.add_classes(i, &["animated".to_string()]);
        }
        deck.set_hidden(1, true);
        deck
    }

    #[test]
    fn test_only_visible_panels_are_drawn() {
        let deck = deck();
        let animator = Animator::new("animated", Duration::from_millis(100));
        let mut term = TestTerminal::new();
        term.render_widget(
            SlideView::new(&deck, &animator, 0, Instant::now()),
            term.area(),
        );

        assert!(term.line_contains(0, "Alpha"));
        assert!(term.buffer_contains("first body"));
        assert!(!term.buffer_contains("Beta"));
    }

    #[test]
    fn test_heading_markers_are_stripped() {
        let deck = deck();
        let animator = Animator::new("animated", Duration::from_millis(100));
        let mut term = TestTerminal::new();
        term.render_widget(
            SlideView::new(&deck, &animator, 0, Instant::now()),
            term.area(),
        );
        assert!(!term.buffer_contains("# Alpha"));
    }

    #[test]
    fn test_entering_panel_starts_below_the_viewport() {
        let mut deck = deck();
        deck.set_hidden(1, false);
        deck.add_classes(1, &["slideInUp".to_string()]);
        deck.add_classes(0, &["slideOutUp".to_string()]);

        let start = Instant::now();
        let mut animator = Animator::new("animated", Duration::from_millis(100));
        animator.tick(&deck, start);

        let mut term = TestTerminal::new();
        term.render_widget(SlideView::new(&deck, &animator, 1, start), term.area());

        // At progress zero the leaving panel is in place and the entering
        // one is fully below the body.
        assert!(term.line_contains(0, "Alpha"));
        assert!(!term.buffer_contains("Beta"));

        let halfway = start + Duration::from_millis(50);
        let mut term = TestTerminal::new();
        term.render_widget(SlideView::new(&deck, &animator, 1, halfway), term.area());
        assert!(term.line_contains(12, "Beta"));
        assert!(!term.line_contains(0, "Alpha"));
    }

    #[test]
    fn test_diagnostics_lists_errors() {
        let errors = vec![Error::invalid_container("no container")];
        let mut term = TestTerminal::new();
        term.render_widget(Diagnostics::new(&errors), term.area());
        assert!(term.buffer_contains("Slides unavailable"));
        assert!(term.buffer_contains("no container"));
    }
}
