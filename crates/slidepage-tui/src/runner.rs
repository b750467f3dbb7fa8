//! Main TUI runner - entry point and event loop

use std::time::{Duration, Instant};

use slidepage_app::{process_message, AppState, Message};
use slidepage_core::prelude::*;

use crate::gesture::SwipeRecognizer;
use crate::{event, render, terminal};

/// Poll timeout while an animation is running (about 60 frames per second)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll timeout while idle; keeps the clock and stall checks moving
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

/// Present the deck until the user quits
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        // Keyboard navigation still works without it
        warn!("{}", e);
    }
    info!(slides = state.slides.len(), "presenting {}", state.title());

    let result = run_loop(&mut term, &mut state);

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    ratatui::restore();
    result
}

fn run_loop(term: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    let mut swipes = SwipeRecognizer::new();

    while !state.should_quit() {
        let now = Instant::now();
        process_message(state, Message::Tick(now));

        term.draw(|frame| render::view(frame, state, now))?;

        if let Some(message) = event::poll(&mut swipes, poll_timeout(state))? {
            process_message(state, message);
        }
    }

    debug!("event loop finished");
    Ok(())
}

fn poll_timeout(state: &AppState) -> Duration {
    if state.animator.is_animating() || state.slides.is_transitioning() {
        FRAME_INTERVAL
    } else {
        IDLE_INTERVAL
    }
}
