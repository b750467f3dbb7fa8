//! Animation tick handling

use std::time::Instant;

use crate::state::AppState;

use super::UpdateResult;

/// Advance the animator and deliver its end signals to the widget.
///
/// Every end signal is delivered; the widget ignores the ones that arrive
/// after its transition already completed.
pub fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    let ended = match state.slides.container() {
        Some(deck) => state.animator.tick(deck, now),
        None => 0,
    };
    for _ in 0..ended {
        state.slides.on_animation_end();
    }

    state.slides.check_stalled(now);
    UpdateResult::none()
}
