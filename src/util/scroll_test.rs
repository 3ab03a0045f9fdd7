use super::*;

#[test]
fn fragment_selector_accepts_named_fragments() {
    assert_eq!(fragment_selector("#section-1"), Some("#section-1"));
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector(""), None);
    assert_eq!(fragment_selector("/about#team"), None);
}

#[test]
fn scroll_target_subtracts_header() {
    assert_eq!(scroll_target(400.0, 1200.0, 80.0), 1520.0);
    assert_eq!(scroll_target(-300.0, 1200.0, 80.0), 820.0);
}

#[test]
fn resolved_anchor_scrolls_below_header() {
    let mut asked = None;
    let target = resolve_anchor_click(
        "#section-1",
        |sel| {
            asked = Some(sel.to_owned());
            Some(250.0)
        },
        600.0,
        80.0,
    );
    assert_eq!(target, AnchorClick::SmoothScroll { top: 770.0 });
    assert!(target.prevents_default());
    assert_eq!(asked.as_deref(), Some("#section-1"));
}

#[test]
fn unresolved_anchor_keeps_default_navigation() {
    let click = resolve_anchor_click("#missing", |_| None, 0.0, 80.0);
    assert_eq!(click, AnchorClick::Native);
    assert!(!click.prevents_default());
}

#[test]
fn bare_hash_never_queries() {
    let target = resolve_anchor_click("#", |_| panic!("bare hash must not be looked up"), 0.0, 80.0);
    assert_eq!(target, AnchorClick::Native);
    assert!(!target.prevents_default());
}
