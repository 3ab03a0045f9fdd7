//! Theme preference: stored choice first, system signal second.
//!
//! The page ships dark. A `light-mode` marker on `<html>` switches it to
//! light. At load, a missing preference only ever removes the marker when
//! the system reports dark; a light system signal leaves the markup as
//! served. Live system changes are applied both ways, but only while no
//! preference is stored.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::util::dom::{ElementPort, PreferenceStore};
use crate::util::timers::Scheduler;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Interpret a raw stored value. Empty means "nothing stored"; anything
    /// other than `light` counts as an explicit dark choice.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "light" => Some(Self::Light),
            _ => Some(Self::Dark),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Settle the system color-scheme lookup. A lookup the browser rejects is
/// logged and counts as "no system signal", so the stored preference and the
/// toggle still work.
pub fn system_query<Q, X: std::fmt::Debug>(lookup: Result<Option<Q>, X>) -> Option<Q> {
    match lookup {
        Ok(query) => query,
        Err(err) => {
            leptos::logging::warn!("prefers-color-scheme lookup failed: {err:?}");
            None
        }
    }
}

pub struct ThemeController<St, E, K>
where
    St: PreferenceStore,
    E: ElementPort,
    K: Scheduler,
{
    store: Rc<St>,
    root: Rc<E>,
    toggle: Option<Rc<E>>,
    scheduler: Rc<K>,
    storage_key: String,
    light_class: String,
    feedback_ms: u32,
}

impl<St, E, K> ThemeController<St, E, K>
where
    St: PreferenceStore,
    E: ElementPort + 'static,
    K: Scheduler,
{
    pub fn new(config: &SiteConfig, store: Rc<St>, root: Rc<E>, toggle: Option<Rc<E>>, scheduler: Rc<K>) -> Self {
        Self {
            store,
            root,
            toggle,
            scheduler,
            storage_key: config.storage_key.clone(),
            light_class: config.light_class.clone(),
            feedback_ms: config.rotation_feedback_ms,
        }
    }

    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    /// Preference read fresh from the store on every call.
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(&self.storage_key).as_deref().and_then(Theme::from_stored)
    }

    /// Theme currently shown, derived from the root marker.
    pub fn current(&self) -> Theme {
        if self.root.has_class(&self.light_class) { Theme::Light } else { Theme::Dark }
    }

    fn apply(&self, theme: Theme) {
        self.root.set_class(&self.light_class, theme == Theme::Light);
    }

    /// Apply the load-time theme and return what is shown afterwards.
    pub fn initialize(&self, system_prefers_dark: bool) -> Theme {
        match self.stored() {
            Some(theme) => self.apply(theme),
            None if system_prefers_dark => self.apply(Theme::Dark),
            None => {}
        }
        self.current()
    }

    /// Flip the theme, persist the result and spin the toggle control.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        self.store.set(&self.storage_key, next.as_str());

        if let Some(control) = &self.toggle {
            control.set_style("transform", "rotate(360deg)");
            let control = Rc::clone(control);
            self.scheduler
                .schedule_detached(self.feedback_ms, Box::new(move || control.set_style("transform", "rotate(0deg)")));
        }
        next
    }

    /// React to a system dark/light change. Returns whether it was applied.
    pub fn on_system_change(&self, prefers_dark: bool) -> bool {
        if self.stored().is_some() {
            return false;
        }
        self.apply(Theme::from_system(prefers_dark));
        true
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;
