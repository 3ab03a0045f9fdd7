//! `localStorage`-backed preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage can be missing (privacy modes) or throw on access. Both cases
//! read as "nothing stored", so the theme falls back to the system signal.

use web_sys::{Storage, Window};

use crate::util::dom::PreferenceStore;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                leptos::logging::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            leptos::logging::warn!("localStorage write failed: {err:?}");
        }
    }
}
