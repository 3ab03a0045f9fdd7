//! Narrow ports over the DOM pieces the controllers touch.
//!
//! DESIGN
//! ======
//! State machines in `state/` are written against these traits instead of
//! `web_sys` directly, so they run in host tests against the in-memory fakes
//! below. The `hydrate` build implements them for real elements and
//! `localStorage` (see `util::element` and `util::storage`).

/// An element whose marker classes, attributes and inline style can change.
///
/// Methods take `&self`: the DOM is shared and interior-mutable.
pub trait ElementPort {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_attribute(&self, name: &str, value: &str);
    fn set_style(&self, property: &str, value: &str);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Add or remove `class` depending on `on`.
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// Durable string key-value store scoped to the site origin.
///
/// Read failures surface as `None` and write failures are swallowed; callers
/// treat both as "no stored value".
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
