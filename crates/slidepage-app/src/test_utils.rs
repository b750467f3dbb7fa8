//! Test helpers shared by the slidepage-app unit tests

use std::collections::BTreeSet;

use crate::container::Container;
use slidepage_core::{Error, Result};

/// In-memory container that records every call it receives
#[derive(Debug, Clone)]
pub struct RecordingContainer {
    pub element: bool,
    pub panel_count: usize,
    pub fail_query: bool,
    pub classes: Vec<BTreeSet<String>>,
    pub hidden: Vec<bool>,
    pub calls: Vec<String>,
}

impl RecordingContainer {
    pub fn with_panels(panel_count: usize) -> Self {
        Self {
            element: true,
            panel_count,
            fail_query: false,
            classes: Vec::new(),
            hidden: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// A container that is not a concrete element
    pub fn detached() -> Self {
        Self {
            element: false,
            ..Self::with_panels(3)
        }
    }

    pub fn has_class(&self, panel: usize, class: &str) -> bool {
        self.classes[panel].contains(class)
    }

    pub fn visible_panels(&self) -> Vec<usize> {
        self.hidden
            .iter()
            .enumerate()
            .filter(|(_, hidden)| !**hidden)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Container for RecordingContainer {
    fn is_element(&self) -> bool {
        self.element
    }

    fn query_panels(&mut self, selector: &str) -> Result<usize> {
        self.calls.push(format!("query {selector}"));
        if self.fail_query {
            return Err(Error::selector(selector, "rejected by test container"));
        }
        self.classes = vec![BTreeSet::new(); self.panel_count];
        self.hidden = vec![false; self.panel_count];
        Ok(self.panel_count)
    }

    fn add_classes(&mut self, panel: usize, classes: &[String]) {
        self.calls.push(format!("add {panel} {}", classes.join(" ")));
        self.classes[panel].extend(classes.iter().cloned());
    }

    fn remove_classes(&mut self, panel: usize, classes: &[String]) {
        self.calls.push(format!("remove {panel} {}", classes.join(" ")));
        for class in classes {
            self.classes[panel].remove(class);
        }
    }

    fn set_hidden(&mut self, panel: usize, hidden: bool) {
        self.calls.push(format!("hidden {panel} {hidden}"));
        self.hidden[panel] = hidden;
    }
}
