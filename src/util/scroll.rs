//! In-page anchor navigation with a fixed-header offset.

/// Every link whose `href` starts with a fragment.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector to resolve for `href`, or `None` when it cannot name an element.
///
/// A bare `#` is not a valid selector, so it never resolves.
pub fn fragment_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}

/// Document-space scroll position that puts an element just under the header.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    rect_top + scroll_y - header_offset
}

/// What an anchor click does to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorClick {
    /// Leave the browser's own fragment navigation alone.
    Native,
    /// Cancel default navigation and smooth-scroll to `top`.
    SmoothScroll { top: f64 },
}

impl AnchorClick {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::SmoothScroll { .. })
    }
}

/// Decide what an anchor click does.
///
/// `lookup` resolves a selector to the element's viewport-relative top.
pub fn resolve_anchor_click(
    href: &str,
    lookup: impl FnOnce(&str) -> Option<f64>,
    scroll_y: f64,
    header_offset: f64,
) -> AnchorClick {
    match fragment_selector(href).and_then(lookup) {
        Some(top) => AnchorClick::SmoothScroll { top: scroll_target(top, scroll_y, header_offset) },
        None => AnchorClick::Native,
    }
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;
