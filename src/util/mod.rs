//! Ports, timers and browser glue shared by the page behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom`, `timers`, `debounce`, `scroll` and `ripple` are plain Rust and run
//! in host tests. The remaining modules wrap `web-sys` and only build with
//! the `hydrate` feature.

pub mod debounce;
pub mod dom;
pub mod ripple;
pub mod scroll;
pub mod timers;

#[cfg(feature = "hydrate")]
pub mod browser_timers;
#[cfg(feature = "hydrate")]
pub mod element;
#[cfg(feature = "hydrate")]
pub mod listener;
#[cfg(feature = "hydrate")]
pub mod observer;
#[cfg(feature = "hydrate")]
pub mod storage;
