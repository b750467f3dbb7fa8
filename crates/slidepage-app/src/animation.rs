//! Keyframe animation driver for deck panels.
//!
//! Watches the animation classes the slide widget puts on panels, runs the
//! matching keyframe for a fixed duration and reports one end signal per
//! finished animation. Only panels carrying the marker class animate, and
//! unknown class names never produce an end signal.

use std::time::{Duration, Instant};

use crate::deck::{Deck, DeckPanel};
use slidepage_core::prelude::*;

/// Motions the terminal renderer knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyframe {
    SlideInUp,
    SlideInDown,
    SlideOutUp,
    SlideOutDown,
    FadeIn,
    FadeOut,
}

impl Keyframe {
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "slideInUp" => Some(Self::SlideInUp),
            "slideInDown" => Some(Self::SlideInDown),
            "slideOutUp" => Some(Self::SlideOutUp),
            "slideOutDown" => Some(Self::SlideOutDown),
            "fadeIn" => Some(Self::FadeIn),
            "fadeOut" => Some(Self::FadeOut),
            _ => None,
        }
    }
}

/// A keyframe sampled at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub keyframe: Keyframe,
    /// Linear progress in `0.0..=1.0`
    pub progress: f32,
}

impl Motion {
    /// Vertical displacement as a fraction of the viewport height.
    /// Positive values move the panel down.
    pub fn offset(&self) -> f32 {
        let p = self.progress;
        match self.keyframe {
            Keyframe::SlideInUp => 1.0 - p,
            Keyframe::SlideInDown => -(1.0 - p),
            Keyframe::SlideOutUp => -p,
            Keyframe::SlideOutDown => p,
            Keyframe::FadeIn | Keyframe::FadeOut => 0.0,
        }
    }

    /// Visibility in `0.0..=1.0`
    pub fn opacity(&self) -> f32 {
        match self.keyframe {
            Keyframe::FadeIn => self.progress,
            Keyframe::FadeOut => 1.0 - self.progress,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct RunningAnimation {
    panel: usize,
    class: String,
    keyframe: Keyframe,
    started: Instant,
    ended: bool,
}

#[derive(Debug, Clone)]
pub struct Animator {
    /// Whitespace-separated tokens of the marker class; a panel animates
    /// only when it carries all of them
    marker: Vec<String>,
    duration: Duration,
    running: Vec<RunningAnimation>,
}

impl Animator {
    pub fn new(marker: impl Into<String>, duration: Duration) -> Self {
        let marker: String = marker.into();
        Self {
            marker: marker.split_whitespace().map(str::to_string).collect(),
            duration,
            running: Vec::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sync with the deck's classes and advance time.
    ///
    /// Returns how many animations finished during this tick.
    pub fn tick(&mut self, deck: &Deck, now: Instant) -> usize {
        let marker = &self.marker;
        let marked = |panel: &DeckPanel| marker.iter().all(|m| panel.has_class(m));
        self.running.retain(|anim| {
            deck.panel(anim.panel).is_some_and(|panel| {
                !panel.hidden && marked(panel) && panel.has_class(&anim.class)
            })
        });

        for (index, panel) in deck.panels().iter().enumerate() {
            if panel.hidden || !marked(panel) {
                continue;
            }
            for class in &panel.classes {
                let Some(keyframe) = Keyframe::from_class(class) else {
                    continue;
                };
                let tracked = self
                    .running
                    .iter()
                    .any(|anim| anim.panel == index && anim.class == *class);
                if !tracked {
                    trace!(panel = index, %class, "animation started");
                    self.running.push(RunningAnimation {
                        panel: index,
                        class: class.clone(),
                        keyframe,
                        started: now,
                        ended: false,
                    });
                }
            }
        }

        let mut finished = 0;
        for anim in self.running.iter_mut().filter(|anim| !anim.ended) {
            if now.saturating_duration_since(anim.started) >= self.duration {
                anim.ended = true;
                finished += 1;
                trace!(panel = anim.panel, class = %anim.class, "animation ended");
            }
        }
        finished
    }

    /// Current motion of a panel, if one of its animations is still running
    pub fn motion(&self, panel: usize, now: Instant) -> Option<Motion> {
        self.running
            .iter()
            .find(|anim| anim.panel == panel && !anim.ended)
            .map(|anim| Motion {
                keyframe: anim.keyframe,
                progress: self.progress(anim.started, now),
            })
    }

    pub fn is_animating(&self) -> bool {
        self.running.iter().any(|anim| !anim.ended)
    }

    fn progress(&self, started: Instant, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}
