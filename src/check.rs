//! Check mode - a JSON report instead of the TUI
//!
//! Builds the presenter state exactly as the TUI would and prints what it
//! found, so decks and configuration can be validated from scripts.

use std::io::{self, Write};

use serde::Serialize;
use slidepage_app::config::AnimationOptions;
use slidepage_app::AppState;
use slidepage_core::prelude::*;

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub title: String,
    pub panels: usize,
    pub headings: Vec<String>,
    pub selector: String,
    pub class: String,
    pub animation: AnimationOptions,
    pub inert: bool,
    pub diagnostics: Vec<String>,
}

impl CheckReport {
    pub fn from_state(state: &AppState) -> Self {
        let headings = state
            .deck()
            .map(|deck| {
                deck.panels()
                    .iter()
                    .map(|panel| panel.heading().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default();

        // An inert widget falls back to default options, so report the
        // configured ones instead.
        let options = &state.settings.slides;
        Self {
            title: state.title().to_string(),
            panels: state.slides.len(),
            headings,
            selector: options.selector.clone(),
            class: options.class.clone(),
            animation: options.animation.clone(),
            inert: state.slides.is_inert(),
            diagnostics: state
                .slides
                .diagnostics()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// The deck can be presented
    pub fn is_ok(&self) -> bool {
        !self.inert
    }

    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// Print the report to stdout
    pub fn emit(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)?;
        stdout.flush()?;
        Ok(())
    }
}
