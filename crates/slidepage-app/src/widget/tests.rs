//! Tests for the SlidePage facade

use super::*;
use crate::config::AnimationOptions;
use crate::test_utils::RecordingContainer;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn empty_table() -> toml::Value {
    toml::Value::Table(toml::Table::new())
}

fn widget(panels: usize) -> SlidePage<RecordingContainer> {
    SlidePage::with_options(
        RecordingContainer::with_panels(panels),
        SlideOptions::default(),
        SlideHooks::new(),
    )
}

fn panels(page: &SlidePage<RecordingContainer>) -> &RecordingContainer {
    page.container().expect("widget should be attached")
}

/// Hooks that append a line per invocation to a shared log
fn logging_hooks() -> (SlideHooks, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let (a, b, c, d) = (log.clone(), log.clone(), log.clone(), log.clone());
    let hooks = SlideHooks::new()
        .created(move || a.borrow_mut().push("created".to_string()))
        .before_change(move |from, to| b.borrow_mut().push(format!("before_change({from}, {to})")))
        .change(move |to, from| c.borrow_mut().push(format!("change({to}, {from})")))
        .changed(move |to, from| d.borrow_mut().push(format!("changed({to}, {from})")));
    (hooks, log)
}

// ─────────────────────────────────────────────────────────
// Construction
// ─────────────────────────────────────────────────────────

#[test]
fn test_construction_marks_and_hides_panels() {
    let page = widget(3);
    let container = panels(&page);

    assert_eq!(page.len(), 3);
    assert_eq!(container.calls[0], r"query ^---\s*$");
    for panel in 0..3 {
        assert!(container.has_class(panel, "animated"));
    }
    assert_eq!(container.visible_panels(), vec![0]);
    assert!(page.diagnostics().is_empty());
    assert!(!page.is_inert());
}

#[test]
fn test_created_fires_once_after_setup() {
    let (hooks, log) = logging_hooks();
    let page = SlidePage::with_options(
        RecordingContainer::with_panels(2),
        SlideOptions::default(),
        hooks,
    );

    assert_eq!(*log.borrow(), vec!["created"]);
    assert_eq!(panels(&page).visible_panels(), vec![0]);
}

#[test]
fn test_untyped_options_are_honoured() {
    let options: toml::Value = toml::from_str(
        r#"
        selector = "^## "
        class = "panel"
        "#,
    )
    .unwrap();
    let page = SlidePage::new(
        Some(RecordingContainer::with_panels(2)),
        &options,
        SlideHooks::new(),
    );

    assert_eq!(page.options().class, "panel");
    assert_eq!(panels(&page).calls[0], "query ^## ");
    assert!(panels(&page).has_class(1, "panel"));
}

#[test]
fn test_missing_container_yields_inert_widget() {
    let mut page: SlidePage<RecordingContainer> =
        SlidePage::new(None, &empty_table(), SlideHooks::new());

    assert!(page.is_inert());
    assert!(!page.diagnostics().is_empty());
    assert!(matches!(
        page.diagnostics()[0],
        Error::InvalidContainer { .. }
    ));

    // None of these may panic or change anything
    page.next();
    page.previous();
    page.show(2);
    page.set_active(1);
    page.on_wheel(1.0);
    page.on_swipe(SwipeDirection::Down);
    page.on_animation_end();
    assert!(!page.check_stalled(Instant::now()));
    assert_eq!(page.active(), 0);
    assert_eq!(page.len(), 0);
}

#[test]
fn test_every_validation_error_is_reported() {
    let page = SlidePage::new(
        Some(RecordingContainer::detached()),
        &toml::Value::String("fast".into()),
        SlideHooks::new(),
    );

    assert!(page.is_inert());
    assert_eq!(page.diagnostics().len(), 2);
    assert!(matches!(
        page.diagnostics()[0],
        Error::InvalidContainer { .. }
    ));
    assert!(matches!(page.diagnostics()[1], Error::InvalidOptions { .. }));
}

#[test]
fn test_detached_container_with_typed_options_is_inert() {
    let (hooks, log) = logging_hooks();
    let page = SlidePage::with_options(RecordingContainer::detached(), SlideOptions::default(), hooks);

    assert!(page.is_inert());
    assert_eq!(page.diagnostics().len(), 1);
    assert!(log.borrow().is_empty(), "created must not fire for inert widgets");
}

#[test]
fn test_failing_panel_query_is_reported() {
    let mut container = RecordingContainer::with_panels(3);
    container.fail_query = true;
    let page = SlidePage::with_options(container, SlideOptions::default(), SlideHooks::new());

    assert!(page.is_inert());
    assert!(matches!(page.diagnostics()[0], Error::Selector { .. }));
}

#[test]
fn test_empty_deck_is_valid_but_static() {
    let mut page = widget(0);
    assert!(!page.is_inert());
    assert!(page.is_empty());

    page.next();
    page.show(0);
    assert_eq!(page.phase(), SlidePhase::Idle);
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigation_sequence_at_boundaries() {
    let mut page = widget(3);

    page.previous();
    assert_eq!(page.active(), 0);
    assert!(!page.is_transitioning());

    page.next();
    assert_eq!(page.active(), 1);
    assert!(page.is_transitioning());

    page.next();
    assert_eq!(page.active(), 1, "dropped while transitioning");

    page.on_animation_end();
    assert!(!page.is_transitioning());

    page.next();
    assert_eq!(page.active(), 2);
    page.on_animation_end();

    page.next();
    assert_eq!(page.active(), 2, "no wraparound");
    assert!(!page.is_transitioning());
}

#[test]
fn test_hooks_fire_in_lifecycle_order() {
    let (hooks, log) = logging_hooks();
    let mut page = SlidePage::with_options(
        RecordingContainer::with_panels(4),
        SlideOptions::default(),
        hooks,
    );

    page.show(3);
    page.on_animation_end();

    assert_eq!(
        *log.borrow(),
        vec![
            "created",
            "before_change(0, 3)",
            "change(3, 0)",
            "changed(3, 0)"
        ]
    );
}

#[test]
fn test_guarded_show_fires_no_hooks() {
    let (hooks, log) = logging_hooks();
    let mut page = SlidePage::with_options(
        RecordingContainer::with_panels(3),
        SlideOptions::default(),
        hooks,
    );
    log.borrow_mut().clear();

    page.show(0);
    page.show(3);
    page.show(99);
    assert!(log.borrow().is_empty());

    page.show(1);
    log.borrow_mut().clear();
    page.show(2);
    page.set_active(0);
    assert!(log.borrow().is_empty());
    assert_eq!(page.transition(), Some((0, 1)));
}

#[test]
fn test_set_active_is_vetoable() {
    let mut page = SlidePage::with_options(
        RecordingContainer::with_panels(3),
        SlideOptions::default(),
        SlideHooks::new().before_change(|_, to| to != 2),
    );

    page.set_active(2);
    assert_eq!(page.active(), 0);
    assert!(!page.is_transitioning());

    page.set_active(1);
    assert_eq!(page.active(), 1);
}

#[test]
fn test_both_panels_visible_during_transition() {
    let mut page = widget(3);
    page.next();

    let container = panels(&page);
    assert_eq!(container.visible_panels(), vec![0, 1]);
    assert!(container.has_class(0, "slideOutUp"));
    assert!(container.has_class(1, "slideInUp"));

    page.on_animation_end();
    let container = panels(&page);
    assert_eq!(container.visible_panels(), vec![1]);
    assert!(!container.has_class(0, "slideOutUp"));
    assert!(!container.has_class(1, "slideInUp"));
    assert!(container.has_class(1, "animated"));
}

#[test]
fn test_backward_transition_uses_first_slot() {
    let mut page = widget(3);
    page.show(2);
    page.on_animation_end();
    page.previous();

    assert_eq!(page.direction(), Some(Direction::Backward));
    let container = panels(&page);
    assert!(container.has_class(2, "slideOutDown"));
    assert!(container.has_class(1, "slideInDown"));
}

#[test]
fn test_stray_animation_end_changes_nothing() {
    let (hooks, log) = logging_hooks();
    let mut page = SlidePage::with_options(
        RecordingContainer::with_panels(3),
        SlideOptions::default(),
        hooks,
    );
    let calls_before = panels(&page).calls.len();

    page.on_animation_end();
    page.on_animation_end();

    assert_eq!(panels(&page).calls.len(), calls_before);
    assert_eq!(*log.borrow(), vec!["created"]);
}

// ─────────────────────────────────────────────────────────
// Input wiring
// ─────────────────────────────────────────────────────────

#[test]
fn test_wheel_drives_navigation() {
    let mut page = widget(3);

    page.on_wheel(-1.0);
    assert_eq!(page.active(), 0);

    page.on_wheel(3.0);
    assert_eq!(page.active(), 1);
    page.on_animation_end();

    page.on_wheel(0.0);
    assert_eq!(page.active(), 0);
}

#[test]
fn test_swipes_drive_navigation() {
    let mut page = widget(3);

    page.on_swipe(SwipeDirection::Left);
    page.on_swipe(SwipeDirection::Right);
    assert_eq!(page.active(), 0);
    assert!(!page.is_transitioning());

    page.on_swipe(SwipeDirection::Down);
    assert_eq!(page.active(), 1);
    page.on_animation_end();

    page.on_swipe(SwipeDirection::Up);
    assert_eq!(page.active(), 0);
}

#[test]
fn test_raw_show_respects_guards() {
    let mut page = widget(3);
    page.handle(RawInput::Show(5));
    assert_eq!(page.active(), 0);

    page.handle(RawInput::Show(2));
    assert_eq!(page.active(), 2);

    page.handle(RawInput::Show(1));
    assert_eq!(page.active(), 2);
}

// ─────────────────────────────────────────────────────────
// Stall recovery
// ─────────────────────────────────────────────────────────

#[test]
fn test_stalled_transition_is_forced_when_configured() {
    let options = SlideOptions {
        animation: AnimationOptions {
            stall_timeout_ms: Some(500),
            ..AnimationOptions::default()
        },
        ..SlideOptions::default()
    };
    let (hooks, log) = logging_hooks();
    let mut page = SlidePage::with_options(RecordingContainer::with_panels(2), options, hooks);

    page.next();
    assert!(!page.check_stalled(Instant::now()));
    assert!(page.is_transitioning());

    assert!(page.check_stalled(Instant::now() + Duration::from_secs(1)));
    assert!(!page.is_transitioning());
    assert_eq!(log.borrow().last().map(String::as_str), Some("changed(1, 0)"));

    assert!(!page.check_stalled(Instant::now() + Duration::from_secs(5)));
}

#[test]
fn test_stalled_transition_waits_forever_by_default() {
    let mut page = widget(2);
    page.next();

    assert!(!page.check_stalled(Instant::now() + Duration::from_secs(3600)));
    assert!(page.is_transitioning());

    page.next();
    page.previous();
    assert_eq!(page.transition(), Some((0, 1)));
}
