//! Fade-in reveal for feature cards and use-cases.
//!
//! Elements are armed hidden (transparent, shifted down, transition set) and
//! flip to shown the first time the observer reports them intersecting.
//! Shown never reverts.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::RevealConfig;
use crate::util::dom::ElementPort;

/// Class selector for every element that fades in.
pub const REVEAL_SELECTOR: &str = ".feature-card, .use-case";

pub fn hidden_transform(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}

pub struct RevealItem<E: ElementPort> {
    element: Rc<E>,
    shown: Cell<bool>,
}

impl<E: ElementPort> RevealItem<E> {
    /// Apply the hidden styles and pre-arm the transition.
    pub fn arm(config: &RevealConfig, element: Rc<E>) -> Self {
        element.set_style("opacity", "0");
        element.set_style("transform", &hidden_transform(config.offset_px));
        element.set_style("transition", &config.transition);
        Self { element, shown: Cell::new(false) }
    }

    pub fn element(&self) -> &Rc<E> {
        &self.element
    }

    pub fn is_shown(&self) -> bool {
        self.shown.get()
    }

    /// Observer callback. Returns true only on the hidden→shown transition.
    pub fn on_intersection(&self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.shown.get() {
            return false;
        }
        self.shown.set(true);
        self.element.set_style("opacity", "1");
        self.element.set_style("transform", "translateY(0)");
        true
    }
}

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;
