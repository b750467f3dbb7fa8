//! Deck documents: the container the terminal presenter drives.
//!
//! A deck is a plain-text document. Panels are discovered by splitting the
//! document at every line that matches the selector regex; blank chunks
//! are dropped and surrounding blank lines trimmed.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;

use crate::container::Container;
use slidepage_core::prelude::*;

/// One panel of a deck, plus the presentation state the widget toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckPanel {
    pub body: String,
    pub classes: BTreeSet<String>,
    pub hidden: bool,
}

impl DeckPanel {
    fn new(body: String) -> Self {
        Self {
            body,
            classes: BTreeSet::new(),
            hidden: false,
        }
    }

    /// First non-blank line with any markdown heading markers removed
    pub fn heading(&self) -> Option<&str> {
        self.body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(|line| line.trim_start_matches('#').trim_start())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

#[derive(Debug, Clone)]
pub struct Deck {
    title: String,
    source: String,
    panels: Vec<DeckPanel>,
}

impl Deck {
    /// Wrap document text. Panels are not discovered until `query_panels`.
    pub fn parse(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            panels: Vec::new(),
        }
    }

    /// Read a deck file; the title is the file stem
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::deck_not_found(path));
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck {}", path.display()))?;
        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("deck")
            .to_string();
        debug!("Read deck {:?} ({} bytes)", path, source.len());
        Ok(Self::parse(title, source))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn panels(&self) -> &[DeckPanel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&DeckPanel> {
        self.panels.get(index)
    }

    /// Indices of panels that are currently not hidden
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, panel)| !panel.hidden)
            .map(|(i, _)| i)
    }

    fn panel_mut(&mut self, index: usize) -> Option<&mut DeckPanel> {
        let panel = self.panels.get_mut(index);
        if panel.is_none() {
            warn!(index, "deck has no panel at this index");
        }
        panel
    }
}

impl Container for Deck {
    fn is_element(&self) -> bool {
        true
    }

    fn query_panels(&mut self, selector: &str) -> Result<usize> {
        let separator = Regex::new(selector).map_err(|e| Error::selector(selector, e.to_string()))?;

        let mut panels = Vec::new();
        let mut chunk: Vec<&str> = Vec::new();
        for line in self.source.lines() {
            if separator.is_match(line) {
                push_chunk(&mut panels, &chunk);
                chunk.clear();
            } else {
                chunk.push(line);
            }
        }
        push_chunk(&mut panels, &chunk);

        self.panels = panels;
        Ok(self.panels.len())
    }

    fn add_classes(&mut self, panel: usize, classes: &[String]) {
        if let Some(panel) = self.panel_mut(panel) {
            panel.classes.extend(split_tokens(classes));
        }
    }

    fn remove_classes(&mut self, panel: usize, classes: &[String]) {
        if let Some(panel) = self.panel_mut(panel) {
            for class in split_tokens(classes) {
                panel.classes.remove(&class);
            }
        }
    }

    fn set_hidden(&mut self, panel: usize, hidden: bool) {
        if let Some(panel) = self.panel_mut(panel) {
            panel.hidden = hidden;
        }
    }
}

/// Class names may hold several space-separated tokens; empty ones are dropped.
fn split_tokens(classes: &[String]) -> impl Iterator<Item = String> + '_ {
    classes
        .iter()
        .flat_map(|c| c.split_whitespace())
        .map(str::to_string)
}

fn push_chunk(panels: &mut Vec<DeckPanel>, lines: &[&str]) {
    let is_blank = |line: &&str| line.trim().is_empty();
    let Some(start) = lines.iter().position(|l| !is_blank(l)) else {
        return;
    };
    let end = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(start);
    panels.push(DeckPanel::new(lines[start..=end].join("\n")));
}
