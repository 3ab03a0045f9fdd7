//! Per-behavior state models.
//!
//! DESIGN
//! ======
//! Each behavior owns one small model written against the `util::dom`
//! ports, so its transitions are unit-tested without a browser.

pub mod counter;
pub mod header;
pub mod nav;
pub mod reveal;
pub mod theme;
