//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use slidepage_app::AppState;

use crate::theme::{palette, styles};
use crate::{layout, widgets};

/// Render the complete UI for the instant `now`.
///
/// Pure with respect to `state`; animation progress is sampled from the
/// animator at `now`.
pub fn view(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_status_bar);

    let clock = state
        .settings
        .ui
        .show_clock
        .then(|| chrono::Local::now().format("%H:%M").to_string());
    let header = widgets::Header::new(state.title())
        .position(state.slides.active(), state.slides.len())
        .clock(clock);
    frame.render_widget(header, areas.header);

    match state.deck() {
        _ if state.slides.is_inert() => {
            frame.render_widget(
                widgets::Diagnostics::new(state.slides.diagnostics()),
                areas.body,
            );
        }
        Some(deck) if !state.slides.is_empty() => {
            frame.render_widget(
                widgets::SlideView::new(deck, &state.animator, state.slides.active(), now),
                areas.body,
            );
        }
        _ => {
            frame.render_widget(
                Paragraph::new("This deck has no slides")
                    .style(styles::faded())
                    .alignment(Alignment::Center),
                areas.body,
            );
        }
    }

    if let Some(status) = areas.status {
        frame.render_widget(widgets::StatusBar::new(state), status);
    }
}
