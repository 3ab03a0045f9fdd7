//! # neuralflow-site
//!
//! Client-side interaction layer for the NeuralFlow marketing site,
//! compiled to WASM and attached to the static page at load.
//!
//! Behaviors: theme preference, mobile navigation drawer, scroll-driven
//! header styling, smooth in-page anchors, fade-in reveal, button ripples
//! and one-shot statistic counters. Each is modelled in `state` against the
//! DOM ports in `util::dom`, and bound to the live document by
//! `pages::landing` when built with the `hydrate` feature.

pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire the page as soon as the module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    pages::landing::boot();
}

/// Detach every handler installed by [`start`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn teardown() {
    pages::landing::shutdown();
}
