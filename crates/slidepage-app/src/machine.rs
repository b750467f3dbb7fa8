//! Slide transition state machine
//!
//! Owns the active/previous indices, the direction of the current
//! transition and the single in-flight flag that serialises transitions.
//! Invalid navigation (out of range, same index, mid-transition) is a
//! silent no-op; rejected requests are only visible at `trace` level.

use crate::config::AnimationOptions;
use crate::container::Container;
use crate::hooks::SlideHooks;
use slidepage_core::prelude::*;
use slidepage_core::{Direction, SlidePhase};

#[derive(Debug)]
pub struct SlideMachine {
    len: usize,
    active: usize,
    previous: usize,
    direction: Option<Direction>,
    transitioning: bool,
    animation: AnimationOptions,
    hooks: SlideHooks,
}

impl SlideMachine {
    pub fn new(len: usize, animation: AnimationOptions, hooks: SlideHooks) -> Self {
        Self {
            len,
            active: 0,
            previous: 0,
            direction: None,
            transitioning: false,
            animation,
            hooks,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Direction of the most recent transition, `None` before the first one
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn phase(&self) -> SlidePhase {
        if self.transitioning {
            SlidePhase::Transitioning
        } else {
            SlidePhase::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// `(from, to)` of the transition in flight.
    ///
    /// The previous index is stale once the machine is idle again, so it is
    /// only exposed here.
    pub fn transition(&self) -> Option<(usize, usize)> {
        self.transitioning.then_some((self.previous, self.active))
    }

    /// Enter class for the current direction
    pub fn enter_class(&self) -> Option<&str> {
        self.direction.map(|d| d.pick(&self.animation.enter).as_str())
    }

    /// Leave class for the current direction
    pub fn leave_class(&self) -> Option<&str> {
        self.direction.map(|d| d.pick(&self.animation.leave).as_str())
    }

    /// Whether a request for `target` would pass the navigation guards
    pub fn can_show(&self, target: usize) -> bool {
        !self.transitioning && target != self.active && target < self.len
    }

    pub(crate) fn hooks_mut(&mut self) -> &mut SlideHooks {
        &mut self.hooks
    }

    /// Start a transition to `target`.
    ///
    /// Returns whether the transition was accepted. Guarded requests and
    /// vetoes leave every field untouched and fire no further hooks.
    pub fn request_show<C: Container + ?Sized>(
        &mut self,
        target: usize,
        container: &mut C,
    ) -> bool {
        if !self.can_show(target) {
            trace!(
                requested = target,
                active = self.active,
                len = self.len,
                transitioning = self.transitioning,
                "navigation ignored"
            );
            return false;
        }

        if self.hooks.fire_before_change(self.active, target).is_veto() {
            debug!(from = self.active, to = target, "transition vetoed");
            return false;
        }

        self.previous = self.active;
        self.active = target;
        let direction = Direction::between(self.previous, self.active);
        self.direction = Some(direction);
        self.transitioning = true;
        debug!(from = self.previous, to = self.active, %direction, "transition started");

        self.hooks.fire_change(self.active, self.previous);
        self.start_animations(direction, container);
        true
    }

    pub fn advance<C: Container + ?Sized>(&mut self, container: &mut C) -> bool {
        match self.active.checked_add(1) {
            Some(target) => self.request_show(target, container),
            None => false,
        }
    }

    pub fn retreat<C: Container + ?Sized>(&mut self, container: &mut C) -> bool {
        let Some(target) = self.active.checked_sub(1) else {
            trace!("already at the first panel");
            return false;
        };
        self.request_show(target, container)
    }

    /// Finish the transition in flight once an animation reports its end.
    ///
    /// Signals arriving while idle are ignored, which also absorbs the second
    /// end signal of a transition whose two panels both animate.
    pub fn complete_transition<C: Container + ?Sized>(&mut self, container: &mut C) -> bool {
        if !self.transitioning {
            trace!("stray animation end ignored");
            return false;
        }

        container.set_hidden(self.previous, true);
        container.remove_classes(self.previous, &self.animation.leave);
        container.remove_classes(self.active, &self.animation.enter);
        self.transitioning = false;
        debug!(from = self.previous, to = self.active, "transition completed");

        self.hooks.fire_changed(self.active, self.previous);
        true
    }

    /// Both panels stay visible and animate until the transition completes.
    fn start_animations<C: Container + ?Sized>(&self, direction: Direction, container: &mut C) {
        let leave = direction.pick(&self.animation.leave);
        let enter = direction.pick(&self.animation.enter);

        container.add_classes(self.previous, std::slice::from_ref(leave));
        container.set_hidden(self.active, false);
        container.add_classes(self.active, std::slice::from_ref(enter));
    }
}
