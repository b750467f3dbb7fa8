//! The host surface a slide widget drives.
//!
//! Panels are addressed by their ordinal within the sequence discovered
//! at construction. The widget never creates or destroys panels; it only
//! toggles classes and visibility through this trait.

use slidepage_core::Result;

#[cfg_attr(test, mockall::automock)]
pub trait Container {
    /// Whether this is a concrete container the widget can attach to
    fn is_element(&self) -> bool;

    /// Discover the panels matching `selector` and return how many there are.
    ///
    /// Called exactly once per widget; the count is fixed afterwards.
    fn query_panels(&mut self, selector: &str) -> Result<usize>;

    fn add_classes(&mut self, panel: usize, classes: &[String]);

    fn remove_classes(&mut self, panel: usize, classes: &[String]);

    fn set_hidden(&mut self, panel: usize, hidden: bool);
}
