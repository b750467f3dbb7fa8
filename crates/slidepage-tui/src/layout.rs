//! Screen layout

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Option<Rect>,
}

/// Split the screen into a one-line header, the slide body and an optional
/// one-line status bar
pub fn create(area: Rect, show_status_bar: bool) -> ScreenAreas {
    if show_status_bar {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        ScreenAreas {
            header,
            body,
            status: Some(status),
        }
    } else {
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        ScreenAreas {
            header,
            body,
            status: None,
        }
    }
}
