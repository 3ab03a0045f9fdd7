use std::rc::Rc;

use super::*;
use crate::util::dom::fake::{FakeElement, MemoryStore};
use crate::util::timers::manual::ManualScheduler;

struct Page {
    store: Rc<MemoryStore>,
    root: Rc<FakeElement>,
    toggle: Rc<FakeElement>,
    sched: Rc<ManualScheduler>,
    ctl: ThemeController<MemoryStore, FakeElement, ManualScheduler>,
}

fn page_with(store: MemoryStore, root: FakeElement) -> Page {
    let store = Rc::new(store);
    let root = Rc::new(root);
    let toggle = Rc::new(FakeElement::default());
    let sched = Rc::new(ManualScheduler::default());
    let ctl = ThemeController::new(
        &SiteConfig::default(),
        Rc::clone(&store),
        Rc::clone(&root),
        Some(Rc::clone(&toggle)),
        Rc::clone(&sched),
    );
    Page { store, root, toggle, sched, ctl }
}

fn stored(page: &Page) -> Option<String> {
    page.store.entries.borrow().get("theme").cloned()
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_from_stored_values() {
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("sepia"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::from_str::<Theme>("\"dark\"").unwrap(), Theme::Dark);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_applies_stored_light() {
    let page = page_with(MemoryStore::with("theme", "light"), FakeElement::default());
    assert_eq!(page.ctl.initialize(true), Theme::Light);
    assert!(page.root.has_class("light-mode"));
}

#[test]
fn initialize_applies_stored_dark_over_markup() {
    let page = page_with(MemoryStore::with("theme", "dark"), FakeElement::with_class("light-mode"));
    assert_eq!(page.ctl.initialize(false), Theme::Dark);
    assert!(!page.root.has_class("light-mode"));
}

#[test]
fn initialize_without_preference_and_dark_system_removes_marker() {
    let page = page_with(MemoryStore::default(), FakeElement::with_class("light-mode"));
    assert_eq!(page.ctl.initialize(true), Theme::Dark);
    assert!(!page.root.has_class("light-mode"));
}

#[test]
fn initialize_without_preference_and_light_system_leaves_markup() {
    let page = page_with(MemoryStore::default(), FakeElement::default());
    assert_eq!(page.ctl.initialize(false), Theme::Dark);
    assert!(!page.root.has_class("light-mode"));
    assert_eq!(page.root.writes.get(), 0);
}

#[test]
fn initialize_treats_failed_store_as_no_preference() {
    let store = MemoryStore::with("theme", "light");
    store.fail_reads.set(true);
    let page = page_with(store, FakeElement::default());
    assert_eq!(page.ctl.initialize(true), Theme::Dark);
}

#[test]
fn rejected_system_lookup_counts_as_no_signal() {
    let lookup: Result<Option<bool>, &str> = Err("SecurityError");
    assert_eq!(system_query(lookup), None);
    assert_eq!(system_query::<bool, &str>(Ok(Some(true))), Some(true));
}

#[test]
fn rejected_system_lookup_still_applies_stored_light_and_toggles() {
    let page = page_with(MemoryStore::with("theme", "light"), FakeElement::default());
    let lookup: Result<Option<bool>, &str> = Err("SecurityError");
    let prefers_dark = system_query(lookup).unwrap_or(false);

    assert_eq!(page.ctl.initialize(prefers_dark), Theme::Light);
    assert!(page.root.has_class("light-mode"));
    assert_eq!(page.ctl.toggle(), Theme::Dark);
    assert_eq!(stored(&page).as_deref(), Some("dark"));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_parity_determines_persisted_value() {
    for n in 1..=6 {
        let page = page_with(MemoryStore::default(), FakeElement::default());
        page.ctl.initialize(true);
        for _ in 0..n {
            page.ctl.toggle();
        }
        let expected = if n % 2 == 0 { "dark" } else { "light" };
        assert_eq!(stored(&page).as_deref(), Some(expected), "after {n} toggles");
        assert_eq!(page.root.has_class("light-mode"), n % 2 == 1);
    }
}

#[test]
fn toggle_persists_even_when_value_unchanged_in_store() {
    let page = page_with(MemoryStore::with("theme", "light"), FakeElement::default());
    assert_eq!(page.ctl.toggle(), Theme::Light);
    assert_eq!(stored(&page).as_deref(), Some("light"));
}

#[test]
fn toggle_spins_control_then_resets_after_feedback_delay() {
    let page = page_with(MemoryStore::default(), FakeElement::default());
    page.ctl.toggle();
    assert_eq!(page.toggle.style("transform").as_deref(), Some("rotate(360deg)"));

    page.sched.advance(399);
    assert_eq!(page.toggle.style("transform").as_deref(), Some("rotate(360deg)"));
    page.sched.advance(1);
    assert_eq!(page.toggle.style("transform").as_deref(), Some("rotate(0deg)"));
}

// =============================================================
// on_system_change
// =============================================================

#[test]
fn system_change_applies_both_ways_without_preference() {
    let page = page_with(MemoryStore::default(), FakeElement::default());
    assert!(page.ctl.on_system_change(false));
    assert!(page.root.has_class("light-mode"));
    assert!(page.ctl.on_system_change(true));
    assert!(!page.root.has_class("light-mode"));
}

#[test]
fn system_change_ignored_once_preference_stored() {
    let page = page_with(MemoryStore::default(), FakeElement::default());
    page.ctl.initialize(true);
    assert!(page.ctl.on_system_change(false));
    page.ctl.toggle();
    let before = page.root.has_class("light-mode");

    assert!(!page.ctl.on_system_change(true));
    assert_eq!(page.root.has_class("light-mode"), before);
}

#[test]
fn system_change_reads_store_at_event_time() {
    let page = page_with(MemoryStore::default(), FakeElement::default());
    page.ctl.initialize(true);
    page.store.set("theme", "dark");
    assert!(!page.ctl.on_system_change(false));
    page.store.entries.borrow_mut().clear();
    assert!(page.ctl.on_system_change(false));
}
