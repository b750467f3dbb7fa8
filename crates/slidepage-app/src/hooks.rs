//! Lifecycle hooks a host can attach to a slide widget.
//!
//! Every hook is optional and defaults to a no-op. `before_change` is the
//! only vetoable hook, and only an explicit boolean `false` vetoes.

use std::fmt;

/// Outcome of a `before_change` hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Allow,
    Veto,
}

impl Verdict {
    pub fn is_veto(self) -> bool {
        self == Verdict::Veto
    }
}

impl From<()> for Verdict {
    fn from(_: ()) -> Self {
        Verdict::Allow
    }
}

impl From<bool> for Verdict {
    fn from(allow: bool) -> Self {
        if allow {
            Verdict::Allow
        } else {
            Verdict::Veto
        }
    }
}

impl From<Option<bool>> for Verdict {
    fn from(value: Option<bool>) -> Self {
        value.map(Verdict::from).unwrap_or_default()
    }
}

// Non-boolean return values never veto, falsy or not.

impl From<i32> for Verdict {
    fn from(_: i32) -> Self {
        Verdict::Allow
    }
}

impl From<i64> for Verdict {
    fn from(_: i64) -> Self {
        Verdict::Allow
    }
}

impl From<f64> for Verdict {
    fn from(_: f64) -> Self {
        Verdict::Allow
    }
}

impl From<&str> for Verdict {
    fn from(_: &str) -> Self {
        Verdict::Allow
    }
}

impl From<String> for Verdict {
    fn from(_: String) -> Self {
        Verdict::Allow
    }
}

type CreatedHook = Box<dyn FnMut()>;
type BeforeChangeHook = Box<dyn FnMut(usize, usize) -> Verdict>;
type ChangeHook = Box<dyn FnMut(usize, usize)>;

/// Optional lifecycle callbacks
#[derive(Default)]
pub struct SlideHooks {
    created: Option<CreatedHook>,
    before_change: Option<BeforeChangeHook>,
    change: Option<ChangeHook>,
    changed: Option<ChangeHook>,
}

impl SlideHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires once after the widget finished its initial setup
    pub fn created(mut self, hook: impl FnMut() + 'static) -> Self {
        self.created = Some(Box::new(hook));
        self
    }

    /// Fires with `(from, to)` before a transition; may veto by returning `false`
    pub fn before_change<R, F>(mut self, mut hook: F) -> Self
    where
        R: Into<Verdict>,
        F: FnMut(usize, usize) -> R + 'static,
    {
        self.before_change = Some(Box::new(move |from, to| hook(from, to).into()));
        self
    }

    /// Fires with `(to, from)` when a transition commits
    pub fn change(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.change = Some(Box::new(hook));
        self
    }

    /// Fires with `(to, from)` once the transition's animations have ended
    pub fn changed(mut self, hook: impl FnMut(usize, usize) + 'static) -> Self {
        self.changed = Some(Box::new(hook));
        self
    }

    pub(crate) fn fire_created(&mut self) {
        if let Some(hook) = self.created.as_mut() {
            hook();
        }
    }

    pub(crate) fn fire_before_change(&mut self, from: usize, to: usize) -> Verdict {
        self.before_change
            .as_mut()
            .map(|hook| hook(from, to))
            .unwrap_or_default()
    }

    pub(crate) fn fire_change(&mut self, to: usize, from: usize) {
        if let Some(hook) = self.change.as_mut() {
            hook(to, from);
        }
    }

    pub(crate) fn fire_changed(&mut self, to: usize, from: usize) {
        if let Some(hook) = self.changed.as_mut() {
            hook(to, from);
        }
    }
}

impl fmt::Debug for SlideHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideHooks")
            .field("created", &self.created.is_some())
            .field("before_change", &self.before_change.is_some())
            .field("change", &self.change.is_some())
            .field("changed", &self.changed.is_some())
            .finish()
    }
}
