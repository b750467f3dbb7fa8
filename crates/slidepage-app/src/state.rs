//! Application state (Model in TEA pattern)

use crate::animation::Animator;
use crate::config::Settings;
use crate::deck::{Deck, DeckPanel};
use crate::hooks::SlideHooks;
use crate::widget::SlidePage;
use slidepage_core::prelude::*;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub slides: SlidePage<Deck>,
    pub animator: Animator,
    pub settings: Settings,
    pub phase: AppPhase,
    title: String,
}

impl AppState {
    pub fn new(deck: Deck, settings: Settings) -> Self {
        Self::with_hooks(deck, settings, presenter_hooks())
    }

    pub fn with_hooks(deck: Deck, settings: Settings, hooks: SlideHooks) -> Self {
        let title = deck.title().to_string();
        let slides = SlidePage::with_options(deck, settings.slides.clone(), hooks);
        let animator = Animator::new(
            settings.slides.class.clone(),
            settings.ui.animation_duration(),
        );
        Self {
            slides,
            animator,
            settings,
            phase: AppPhase::Running,
            title,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.slides.container()
    }

    pub fn active_panel(&self) -> Option<&DeckPanel> {
        self.deck()?.panel(self.slides.active())
    }
}

/// Hooks the presenter installs: transitions are written to the log.
fn presenter_hooks() -> SlideHooks {
    SlideHooks::new()
        .created(|| debug!("deck ready"))
        .change(|to, from| debug!(from, to, "slide change started"))
        .changed(|to, from| info!(from, to, "showing slide {}", to + 1))
}
