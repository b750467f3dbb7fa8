//! The slide widget facade
//!
//! [`SlidePage`] validates its inputs, discovers panels, wires normalized
//! input into the state machine and routes end-of-animation signals back
//! to it. Construction never fails: invalid inputs are reported as
//! diagnostics and produce an inert widget whose methods do nothing.

use std::time::Instant;

use crate::config::SlideOptions;
use crate::container::Container;
use crate::hooks::SlideHooks;
use crate::input::{self, RawInput};
use crate::machine::SlideMachine;
use slidepage_core::prelude::*;
use slidepage_core::{Direction, Intent, SlidePhase, SwipeDirection};

#[derive(Debug)]
pub struct SlidePage<C: Container> {
    container: Option<C>,
    machine: SlideMachine,
    options: SlideOptions,
    diagnostics: Vec<Error>,
    transition_started: Option<Instant>,
}

impl<C: Container> SlidePage<C> {
    /// Build a widget from an untyped options value.
    ///
    /// Reports every validation error (missing or non-element container,
    /// non-table or malformed options) before giving up.
    pub fn new(container: Option<C>, options: &toml::Value, hooks: SlideHooks) -> Self {
        let mut diagnostics = Vec::new();
        let container = validate_container(container, &mut diagnostics);
        let options = SlideOptions::from_value(options)
            .map_err(|e| diagnostics.push(e))
            .ok();

        match (container, options) {
            (Some(container), Some(options)) => Self::attach(container, options, hooks),
            _ => Self::inert(diagnostics),
        }
    }

    /// Build a widget from already-typed options
    pub fn with_options(container: C, options: SlideOptions, hooks: SlideHooks) -> Self {
        let mut diagnostics = Vec::new();
        match validate_container(Some(container), &mut diagnostics) {
            Some(container) => Self::attach(container, options, hooks),
            None => Self::inert(diagnostics),
        }
    }

    fn attach(mut container: C, options: SlideOptions, hooks: SlideHooks) -> Self {
        let len = match container.query_panels(&options.selector) {
            Ok(len) => len,
            Err(e) => return Self::inert(vec![e]),
        };

        let marker = std::slice::from_ref(&options.class);
        for panel in 0..len {
            container.add_classes(panel, marker);
            if panel != 0 {
                container.set_hidden(panel, true);
            }
        }
        debug!(panels = len, selector = %options.selector, "slide widget attached");

        let mut machine = SlideMachine::new(len, options.animation.clone(), hooks);
        machine.hooks_mut().fire_created();

        Self {
            container: Some(container),
            machine,
            options,
            diagnostics: Vec::new(),
            transition_started: None,
        }
    }

    fn inert(diagnostics: Vec<Error>) -> Self {
        for e in &diagnostics {
            error!("[SlidePage] {}", e);
        }
        Self {
            container: None,
            machine: SlideMachine::new(0, Default::default(), SlideHooks::new()),
            options: SlideOptions::default(),
            diagnostics,
            transition_started: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn active(&self) -> usize {
        self.machine.active()
    }

    pub fn len(&self) -> usize {
        self.machine.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machine.is_empty()
    }

    pub fn phase(&self) -> SlidePhase {
        self.machine.phase()
    }

    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.machine.direction()
    }

    /// `(from, to)` while a transition is in flight
    pub fn transition(&self) -> Option<(usize, usize)> {
        self.machine.transition()
    }

    /// True when construction failed and the widget ignores all calls
    pub fn is_inert(&self) -> bool {
        self.container.is_none()
    }

    /// Validation errors reported during construction
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn options(&self) -> &SlideOptions {
        &self.options
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Assigning the active index goes through the same guards as [`show`](Self::show)
    pub fn set_active(&mut self, index: usize) {
        self.show(index);
    }

    pub fn show(&mut self, index: usize) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        if self.machine.request_show(index, container) {
            self.transition_started = Some(Instant::now());
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if let Some(index) = self.active().checked_add(1) {
            self.show(index);
        }
    }

    pub fn previous(&mut self) {
        match self.active().checked_sub(1) {
            Some(index) => self.show(index),
            None => trace!("already at the first panel"),
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Advance => self.next(),
            Intent::Retreat => self.previous(),
            Intent::Goto(index) => self.show(index),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Input and animation wiring
    // ─────────────────────────────────────────────────────────

    pub fn handle(&mut self, raw: RawInput) {
        if let Some(intent) = input::to_intent(raw) {
            self.apply(intent);
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.handle(RawInput::Wheel { delta_y });
    }

    pub fn on_swipe(&mut self, direction: SwipeDirection) {
        self.handle(RawInput::Swipe(direction));
    }

    /// End-of-animation signal from either panel of the transition
    pub fn on_animation_end(&mut self) {
        let Some(container) = self.container.as_mut() else {
            return;
        };
        if self.machine.complete_transition(container) {
            self.transition_started = None;
        }
    }

    /// Force-complete a transition stuck past `animation.stall_timeout_ms`.
    ///
    /// Returns true when a stalled transition was finished. Without a
    /// configured timeout a transition waits for its end signal forever.
    pub fn check_stalled(&mut self, now: Instant) -> bool {
        let (Some(timeout), Some(started)) =
            (self.options.animation.stall_timeout(), self.transition_started)
        else {
            return false;
        };
        if now.saturating_duration_since(started) < timeout {
            return false;
        }

        warn!(
            transition = ?self.transition(),
            timeout_ms = timeout.as_millis() as u64,
            "animation end never arrived, forcing completion"
        );
        self.on_animation_end();
        true
    }
}

fn validate_container<C: Container>(
    container: Option<C>,
    diagnostics: &mut Vec<Error>,
) -> Option<C> {
    match container {
        Some(container) if container.is_element() => Some(container),
        Some(_) => {
            diagnostics.push(Error::invalid_container("container is not a concrete element"));
            None
        }
        None => {
            diagnostics.push(Error::invalid_container("no container found"));
            None
        }
    }
}

#[cfg(test)]
mod tests;
