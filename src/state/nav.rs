//! Mobile navigation drawer.
//!
//! The `active` class on the menu is the open/closed state; the toggle's
//! `active` class, the body's `menu-open` class and the toggle's
//! `aria-expanded` attribute mirror it. Every close path funnels through
//! [`NavMenu::close`], which writes nothing when the drawer is already shut.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::util::dom::ElementPort;

/// Where a click landed, as seen by the handler receiving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavClick {
    Toggle,
    Link,
    /// Any click that bubbled up to the document.
    Document { inside_menu: bool, on_toggle: bool },
}

/// Whether the event may keep bubbling after the handler ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

pub struct NavMenu<E: ElementPort> {
    menu: Rc<E>,
    toggle: Rc<E>,
    body: Rc<E>,
    active_class: String,
    body_class: String,
    breakpoint_px: f64,
}

impl<E: ElementPort> NavMenu<E> {
    pub fn new(config: &SiteConfig, menu: Rc<E>, toggle: Rc<E>, body: Rc<E>) -> Self {
        Self {
            menu,
            toggle,
            body,
            active_class: config.active_class.clone(),
            body_class: config.menu_open_class.clone(),
            breakpoint_px: config.nav_breakpoint_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.has_class(&self.active_class)
    }

    fn set_open(&self, open: bool) {
        self.menu.set_class(&self.active_class, open);
        self.toggle.set_class(&self.active_class, open);
        self.body.set_class(&self.body_class, open);
        self.toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    /// Toggle-control click. Returns the new open state.
    pub fn toggle(&self) -> bool {
        let next = !self.is_open();
        self.set_open(next);
        next
    }

    /// Close the drawer if open. Returns whether anything changed.
    pub fn close(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.set_open(false);
        true
    }

    pub fn on_link_click(&self) -> bool {
        self.close()
    }

    /// Document click that was not stopped by the toggle control.
    pub fn on_outside_click(&self, inside_menu: bool, on_toggle: bool) -> bool {
        if inside_menu || on_toggle {
            return false;
        }
        self.close()
    }

    /// Route a click to its handler. Toggle clicks stop propagation so the
    /// document-level check never sees the click that opened the drawer.
    pub fn on_click(&self, click: NavClick) -> Propagation {
        match click {
            NavClick::Toggle => {
                self.toggle();
                Propagation::Stop
            }
            NavClick::Link => {
                self.on_link_click();
                Propagation::Continue
            }
            NavClick::Document { inside_menu, on_toggle } => {
                self.on_outside_click(inside_menu, on_toggle);
                Propagation::Continue
            }
        }
    }

    pub fn on_key(&self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Runs once the resize debounce settles, with the width read at that time.
    pub fn on_resize_settled(&self, viewport_width: f64) -> bool {
        viewport_width > self.breakpoint_px && self.close()
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;
