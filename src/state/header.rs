//! Header `scrolled` marker driven by the vertical scroll offset.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::util::dom::ElementPort;

/// True once the page has scrolled strictly past `threshold`.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub struct ScrollHeader<E: ElementPort> {
    header: Rc<E>,
    class: String,
    threshold: f64,
    scrolled: Cell<bool>,
}

impl<E: ElementPort> ScrollHeader<E> {
    pub fn new(config: &SiteConfig, header: Rc<E>) -> Self {
        let class = config.scrolled_class.clone();
        let scrolled = Cell::new(header.has_class(&class));
        Self { header, class, threshold: config.header_threshold_px, scrolled }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    /// Recompute on a scroll event. Touches the DOM only on a state change.
    pub fn on_scroll(&self, offset: f64) -> bool {
        let next = is_scrolled(offset, self.threshold);
        if next == self.scrolled.get() {
            return false;
        }
        self.scrolled.set(next);
        self.header.set_class(&self.class, next);
        true
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;
